use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::underwriting::artifacts::{
    ArtifactBundle, CategoricalEncoder, Classifier, EncoderRegistry, FeatureScaler,
    LogisticRegression, SchemaMismatchError,
};
use crate::underwriting::catalog::VehicleCatalog;
use crate::underwriting::config::{RiskThreshold, ScoringConfig, ZeroIncomePolicy};
use crate::underwriting::domain::{
    BlacklistStatus, DebtorType, HousingStatus, LoanApplication, OccupationGroup, TrainingLabel,
    VehicleSelection,
};
use crate::underwriting::engine::RiskEngine;
use crate::underwriting::features::FeatureSlot;
use crate::underwriting::form::LoanApplicationForm;
use crate::underwriting::service::CreditScoringService;

/// 371.1M vehicle, 30% down, 4.5% a year over 60 months, 15M monthly income.
pub(super) fn reference_application() -> LoanApplication {
    LoanApplication {
        vehicle: VehicleSelection {
            name: "Mazda 2".to_string(),
            price: 371_100_000.0,
        },
        down_payment_percent: 30.0,
        annual_interest_rate_percent: 4.5,
        tenor_months: 60,
        monthly_income: 15_000_000.0,
        age: 30,
        occupation: OccupationGroup::GroupB,
        blacklist: BlacklistStatus::NotListed,
        debtor_type: DebtorType::New,
        dependents: 2,
        housing: HousingStatus::Owned,
    }
}

pub(super) fn reference_form() -> LoanApplicationForm {
    LoanApplicationForm {
        vehicle_name: "Mazda 2".to_string(),
        monthly_income: 15_000_000.0,
        down_payment_percent: 30.0,
        annual_interest_rate_percent: 4.5,
        tenor_months: 60,
        age: 30,
        occupation: OccupationGroup::GroupB,
        blacklist: BlacklistStatus::NotListed,
        debtor_type: DebtorType::New,
        dependents: 2,
        housing: HousingStatus::Owned,
    }
}

fn labels<T: TrainingLabel>() -> Vec<String> {
    T::labels().into_iter().map(str::to_string).collect()
}

pub(super) fn encoders() -> EncoderRegistry {
    let mut registry = EncoderRegistry::default();
    let vehicles = VehicleCatalog::standard()
        .listings()
        .iter()
        .map(|listing| listing.name.clone())
        .collect();
    registry.insert(
        "NAME_CAR",
        CategoricalEncoder::new(vehicles).expect("unique vehicles"),
    );
    registry.insert(
        "OCCUPATION_TYPE",
        CategoricalEncoder::new(labels::<OccupationGroup>()).expect("unique labels"),
    );
    registry.insert(
        "DATA_BLACKLIST",
        CategoricalEncoder::new(labels::<BlacklistStatus>()).expect("unique labels"),
    );
    registry.insert(
        "DEBITUR",
        CategoricalEncoder::new(labels::<DebtorType>()).expect("unique labels"),
    );
    registry.insert(
        "HOUSING_TYPE",
        CategoricalEncoder::new(labels::<HousingStatus>()).expect("unique labels"),
    );
    registry
}

pub(super) fn identity_scaler() -> FeatureScaler {
    let width = FeatureSlot::ALL.len();
    FeatureScaler {
        feature_names: FeatureSlot::columns()
            .into_iter()
            .map(str::to_string)
            .collect(),
        mean: vec![0.0; width],
        scale: vec![1.0; width],
    }
}

/// Only the blacklist slot carries weight: listed (code 0) scores high.
pub(super) fn blacklist_model() -> LogisticRegression {
    let mut coefficients = vec![0.0; FeatureSlot::ALL.len()];
    coefficients[10] = -4.0;
    LogisticRegression {
        coefficients,
        intercept: 2.0,
    }
}

pub(super) fn bundle() -> ArtifactBundle {
    ArtifactBundle::new(Box::new(blacklist_model()), identity_scaler(), encoders())
        .expect("fixture artifacts are consistent")
}

pub(super) fn scoring_config(threshold: f64, policy: ZeroIncomePolicy) -> ScoringConfig {
    ScoringConfig {
        threshold: RiskThreshold::new(threshold).expect("valid threshold"),
        zero_income_policy: policy,
    }
}

pub(super) fn engine() -> RiskEngine {
    RiskEngine::new(
        Arc::new(bundle()),
        scoring_config(0.5, ZeroIncomePolicy::Undefined),
    )
}

pub(super) fn service() -> CreditScoringService {
    CreditScoringService::new(Arc::new(engine()), Arc::new(VehicleCatalog::standard()))
}

/// Classifier that records nothing and always answers the same probability.
pub(super) struct ConstantClassifier {
    pub(super) probability: f64,
    pub(super) width: usize,
}

impl Classifier for ConstantClassifier {
    fn predict_probability(&self, features: &[f64]) -> Result<f64, SchemaMismatchError> {
        if features.len() != self.width {
            return Err(SchemaMismatchError::new("classifier", "width differs"));
        }
        Ok(self.probability)
    }

    fn input_width(&self) -> Option<usize> {
        Some(self.width)
    }

    fn name(&self) -> &str {
        "constant"
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
