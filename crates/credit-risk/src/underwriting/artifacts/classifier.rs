use serde::{Deserialize, Serialize};

use super::SchemaMismatchError;

/// Pre-trained binary classifier over a scaled feature vector.
pub trait Classifier: Send + Sync {
    /// Probability of the positive ("Macet") class.
    fn predict_probability(&self, features: &[f64]) -> Result<f64, SchemaMismatchError>;

    /// Number of inputs the model was fitted on, when known.
    fn input_width(&self) -> Option<usize>;

    fn name(&self) -> &str;
}

/// Linear model with a logistic link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LogisticRegression {
    fn decision_function(&self, features: &[f64]) -> Result<f64, SchemaMismatchError> {
        if features.len() != self.coefficients.len() {
            return Err(SchemaMismatchError::new(
                "classifier",
                format!(
                    "expects {} features but received {}",
                    self.coefficients.len(),
                    features.len()
                ),
            ));
        }

        Ok(self
            .coefficients
            .iter()
            .zip(features)
            .map(|(weight, value)| weight * value)
            .sum::<f64>()
            + self.intercept)
    }
}

impl Classifier for LogisticRegression {
    fn predict_probability(&self, features: &[f64]) -> Result<f64, SchemaMismatchError> {
        self.decision_function(features).map(sigmoid)
    }

    fn input_width(&self) -> Option<usize> {
        Some(self.coefficients.len())
    }

    fn name(&self) -> &str {
        "logistic_regression"
    }
}

/// Serialized classifier, tagged by model family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum ClassifierArtifact {
    LogisticRegression(LogisticRegression),
}

impl ClassifierArtifact {
    pub fn into_classifier(self) -> Box<dyn Classifier> {
        match self {
            ClassifierArtifact::LogisticRegression(model) => Box::new(model),
        }
    }
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let exp = z.exp();
        exp / (1.0 + exp)
    }
}
