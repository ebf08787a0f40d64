use crate::cli::ScoringOverrides;
use credit_risk::config::{parse_threshold, AppConfig};
use credit_risk::error::AppError;
use credit_risk::underwriting::{
    ArtifactBundle, CreditScoringService, RiskEngine, RiskThreshold, TrainingLabel,
    VehicleCatalog,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Fold command-line overrides into the loaded configuration.
pub(crate) fn apply_overrides(config: &mut AppConfig, overrides: ScoringOverrides) {
    if let Some(directory) = overrides.artifact_dir {
        config.artifacts.directory = directory;
    }
    if let Some(threshold) = overrides.threshold {
        config.scoring.threshold = threshold;
    }
}

pub(crate) fn load_catalog(config: &AppConfig) -> Result<VehicleCatalog, AppError> {
    match &config.artifacts.vehicle_catalog {
        Some(path) => {
            let catalog = VehicleCatalog::from_path(path)?;
            info!(path = %path.display(), vehicles = catalog.listings().len(), "vehicle catalog loaded");
            Ok(catalog)
        }
        None => Ok(VehicleCatalog::standard()),
    }
}

/// Load artifacts and catalog once; any failure here is fatal for the process.
pub(crate) fn build_scoring_service(config: &AppConfig) -> Result<CreditScoringService, AppError> {
    let bundle = ArtifactBundle::load(&config.artifacts.directory)?;
    let catalog = load_catalog(config)?;
    let engine = RiskEngine::new(Arc::new(bundle), config.scoring);

    info!(
        threshold = config.scoring.threshold.value(),
        zero_income_policy = ?config.scoring.zero_income_policy,
        "risk engine configured"
    );

    Ok(CreditScoringService::new(Arc::new(engine), Arc::new(catalog)))
}

pub(crate) fn parse_threshold_arg(raw: &str) -> Result<RiskThreshold, String> {
    parse_threshold(raw).map_err(|err| err.to_string())
}

pub(crate) fn parse_label<T: TrainingLabel>(raw: &str) -> Result<T, String> {
    T::from_label(raw).ok_or_else(|| {
        format!(
            "'{raw}' is not one of: {}",
            T::labels()
                .iter()
                .map(|label| format!("\"{label}\""))
                .collect::<Vec<_>>()
                .join(", ")
        )
    })
}
