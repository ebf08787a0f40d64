use std::sync::Arc;

use chrono::Utc;
use tracing::warn;

use super::catalog::VehicleCatalog;
use super::engine::{RiskEngine, ScoringError};
use super::form::{FormError, LoanApplicationForm};
use super::report::EvaluationReport;

/// Service composing form validation, the price catalog and the risk engine.
pub struct CreditScoringService {
    engine: Arc<RiskEngine>,
    catalog: Arc<VehicleCatalog>,
}

impl CreditScoringService {
    pub fn new(engine: Arc<RiskEngine>, catalog: Arc<VehicleCatalog>) -> Self {
        Self { engine, catalog }
    }

    pub fn catalog(&self) -> &VehicleCatalog {
        &self.catalog
    }

    /// Validate a submitted form and score it.
    pub fn evaluate(
        &self,
        form: LoanApplicationForm,
    ) -> Result<EvaluationReport, CreditServiceError> {
        let application = form.into_application(&self.catalog).map_err(|error| {
            warn!(%error, "application form rejected");
            error
        })?;

        let evaluation = self.engine.evaluate(&application).map_err(|error| {
            warn!(%error, input_error = error.is_input_error(), "scoring aborted");
            error
        })?;

        Ok(EvaluationReport::new(
            &application,
            &evaluation,
            self.engine.config().threshold.value(),
            Utc::now(),
        ))
    }
}

/// Error raised by the scoring service.
#[derive(Debug, thiserror::Error)]
pub enum CreditServiceError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

impl CreditServiceError {
    pub fn is_input_error(&self) -> bool {
        match self {
            CreditServiceError::Form(_) => true,
            CreditServiceError::Scoring(error) => error.is_input_error(),
        }
    }
}
