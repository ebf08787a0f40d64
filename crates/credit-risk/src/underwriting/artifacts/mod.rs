//! Training-time artifacts: classifier, scaler and categorical encoders.
//!
//! The bundle is loaded once at startup and shared read-only. Loading fails
//! fast when a file is missing, unparsable, or disagrees with the feature
//! schema in [`FeatureSlot::ALL`].

mod classifier;
mod encoding;
mod scaler;

pub use classifier::{Classifier, ClassifierArtifact, LogisticRegression};
pub use encoding::{CategoricalEncoder, EncoderRegistry, EncodingError, UnknownCategoryError};
pub use scaler::FeatureScaler;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::info;

use super::features::FeatureSlot;

pub const MODEL_FILE: &str = "model.json";
pub const SCALER_FILE: &str = "scaler.json";
pub const ENCODERS_FILE: &str = "encoders.json";

/// The feature vector does not have the shape an artifact was fitted on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("feature schema mismatch in {component}: {detail}")]
pub struct SchemaMismatchError {
    pub component: &'static str,
    pub detail: String,
}

impl SchemaMismatchError {
    pub fn new(component: &'static str, detail: impl Into<String>) -> Self {
        Self {
            component,
            detail: detail.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("required artifact {} is missing", path.display())]
    Missing { path: PathBuf },
    #[error("failed to read artifact {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("artifact {} is corrupt: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("artifacts do not match the feature schema: {0}")]
    Schema(#[from] SchemaMismatchError),
}

/// Immutable set of fitted artifacts shared by every evaluation.
pub struct ArtifactBundle {
    classifier: Box<dyn Classifier>,
    scaler: FeatureScaler,
    encoders: EncoderRegistry,
}

impl std::fmt::Debug for ArtifactBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArtifactBundle")
            .field("classifier", &self.classifier.name())
            .field("scaler", &self.scaler.feature_names)
            .field("encoders", &self.encoders.columns().collect::<Vec<_>>())
            .finish()
    }
}

impl ArtifactBundle {
    /// Assemble a bundle from already-built parts, validating the schema.
    pub fn new(
        classifier: Box<dyn Classifier>,
        scaler: FeatureScaler,
        encoders: EncoderRegistry,
    ) -> Result<Self, ArtifactError> {
        let bundle = Self {
            classifier,
            scaler,
            encoders,
        };
        bundle.validate()?;
        Ok(bundle)
    }

    /// Load `model.json`, `scaler.json` and `encoders.json` from `directory`.
    pub fn load(directory: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let directory = directory.as_ref();

        let classifier: ClassifierArtifact = read_json(&directory.join(MODEL_FILE))?;
        let scaler: FeatureScaler = read_json(&directory.join(SCALER_FILE))?;
        let encoders: EncoderRegistry = read_json(&directory.join(ENCODERS_FILE))?;

        let bundle = Self::new(classifier.into_classifier(), scaler, encoders)?;
        info!(
            directory = %directory.display(),
            classifier = bundle.classifier.name(),
            features = bundle.scaler.feature_names.len(),
            "model artifacts loaded"
        );
        Ok(bundle)
    }

    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    pub fn scaler(&self) -> &FeatureScaler {
        &self.scaler
    }

    pub fn encoders(&self) -> &EncoderRegistry {
        &self.encoders
    }

    fn validate(&self) -> Result<(), SchemaMismatchError> {
        self.scaler.check_consistency()?;

        let expected = FeatureSlot::columns();
        if self.scaler.feature_names != expected {
            return Err(SchemaMismatchError::new(
                "scaler",
                format!(
                    "fitted on [{}], service builds [{}]",
                    self.scaler.feature_names.join(", "),
                    expected.join(", ")
                ),
            ));
        }

        if let Some(width) = self.classifier.input_width() {
            if width != expected.len() {
                return Err(SchemaMismatchError::new(
                    "classifier",
                    format!("fitted on {width} features, service builds {}", expected.len()),
                ));
            }
        }

        for slot in FeatureSlot::categorical() {
            let column = slot.column();
            let encoder = self.encoders.get(column).ok_or_else(|| {
                SchemaMismatchError::new("encoders", format!("no encoder for {column}"))
            })?;

            if let Some(labels) = slot.closed_vocabulary() {
                if let Some(missing) = labels.iter().find(|label| !encoder.contains(label)) {
                    return Err(SchemaMismatchError::new(
                        "encoders",
                        format!("{column} encoder does not know '{missing}'"),
                    ));
                }
            }
        }

        Ok(())
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let raw = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ArtifactError::Missing {
            path: path.to_path_buf(),
        },
        _ => ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    serde_json::from_str(&raw).map_err(|source| ArtifactError::Corrupt {
        path: path.to_path_buf(),
        source,
    })
}
