//! Vehicle loan affordability and credit risk scoring.
//!
//! An application flows through the amortization calculator, the feature
//! builder, the categorical encoders, the scaler and finally the classifier
//! and threshold. Artifacts are loaded once and shared by handle.

pub mod amortization;
pub mod artifacts;
pub mod catalog;
mod config;
pub mod domain;
pub mod engine;
pub mod features;
pub mod form;
pub mod report;
pub mod router;
pub mod scorer;
pub mod service;

#[cfg(test)]
mod tests;

pub use amortization::{AmortizationCalculator, AmortizationError, AmortizationResult};
pub use artifacts::{
    ArtifactBundle, ArtifactError, CategoricalEncoder, Classifier, ClassifierArtifact,
    EncoderRegistry, FeatureScaler, LogisticRegression, SchemaMismatchError,
    UnknownCategoryError,
};
pub use catalog::{CatalogError, VehicleCatalog, VehicleListing};
pub use config::{RiskThreshold, ScoringConfig, ZeroIncomePolicy};
pub use domain::{
    BlacklistStatus, DebtorType, HousingStatus, LoanApplication, OccupationGroup,
    TrainingLabel, VehicleSelection,
};
pub use engine::{Evaluation, RiskEngine, ScoringError};
pub use features::{FeatureRecord, FeatureSlot, FeatureValue, FeatureVector, FeatureVectorBuilder};
pub use form::{FormError, LoanApplicationForm};
pub use report::{format_rupiah, EvaluationReport};
pub use router::credit_router;
pub use scorer::{RiskLabel, RiskPrediction, RiskScorer};
pub use service::{CreditScoringService, CreditServiceError};
