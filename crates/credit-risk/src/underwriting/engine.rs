use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use super::amortization::{AmortizationCalculator, AmortizationError, AmortizationResult};
use super::artifacts::{ArtifactBundle, EncodingError, SchemaMismatchError, UnknownCategoryError};
use super::config::ScoringConfig;
use super::domain::LoanApplication;
use super::features::FeatureVectorBuilder;
use super::scorer::{RiskPrediction, RiskScorer};

/// Outcome of a single submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub amortization: AmortizationResult,
    pub prediction: RiskPrediction,
}

/// Failure scoped to one submission; the engine stays usable afterwards.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategoryError),
    #[error(transparent)]
    SchemaMismatch(#[from] SchemaMismatchError),
    #[error(transparent)]
    DivisionEdgeCase(#[from] AmortizationError),
}

impl From<EncodingError> for ScoringError {
    fn from(value: EncodingError) -> Self {
        match value {
            EncodingError::UnknownCategory(error) => Self::UnknownCategory(error),
            EncodingError::SchemaMismatch(error) => Self::SchemaMismatch(error),
        }
    }
}

impl ScoringError {
    /// Whether the applicant can fix this by changing their input.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, ScoringError::SchemaMismatch(_))
    }
}

/// Stateless evaluator over a shared, read-only artifact bundle.
pub struct RiskEngine {
    artifacts: Arc<ArtifactBundle>,
    calculator: AmortizationCalculator,
    scorer: RiskScorer,
    config: ScoringConfig,
}

impl RiskEngine {
    pub fn new(artifacts: Arc<ArtifactBundle>, config: ScoringConfig) -> Self {
        Self {
            artifacts,
            calculator: AmortizationCalculator::new(config.zero_income_policy),
            scorer: RiskScorer::new(config.threshold),
            config,
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn evaluate(&self, application: &LoanApplication) -> Result<Evaluation, ScoringError> {
        let amortization = self.calculator.assess(application)?;

        let record = FeatureVectorBuilder::build(application, &amortization);
        let encoded = self.artifacts.encoders().encode_record(&record)?;
        let scaled = self.artifacts.scaler().transform(&encoded)?;
        debug!(features = ?scaled.values, "feature vector scaled");

        let prediction = self
            .scorer
            .score(self.artifacts.classifier(), &scaled.values)?;

        info!(
            vehicle = %application.vehicle.name,
            probability = prediction.probability,
            label = prediction.label.label(),
            threshold = self.config.threshold.value(),
            "application scored"
        );

        Ok(Evaluation {
            amortization,
            prediction,
        })
    }
}
