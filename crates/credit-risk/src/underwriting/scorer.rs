use serde::{Deserialize, Serialize};

use super::artifacts::{Classifier, SchemaMismatchError};
use super::config::RiskThreshold;

/// Binary credit outcome the classifier was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLabel {
    /// Class 0, payments expected to stay current.
    #[serde(rename = "Lancar")]
    Current,
    /// Class 1, expected to default.
    #[serde(rename = "Macet")]
    Default,
}

impl RiskLabel {
    pub const fn code(self) -> u8 {
        match self {
            RiskLabel::Current => 0,
            RiskLabel::Default => 1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskLabel::Current => "Lancar",
            RiskLabel::Default => "Macet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskPrediction {
    pub probability: f64,
    pub label: RiskLabel,
}

impl RiskPrediction {
    pub fn is_elevated(&self) -> bool {
        self.label == RiskLabel::Default
    }
}

pub struct RiskScorer {
    threshold: RiskThreshold,
}

impl RiskScorer {
    pub fn new(threshold: RiskThreshold) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> RiskThreshold {
        self.threshold
    }

    /// Strictly greater than the threshold is a default; equal stays current.
    pub fn label_for(&self, probability: f64) -> RiskLabel {
        if probability > self.threshold.value() {
            RiskLabel::Default
        } else {
            RiskLabel::Current
        }
    }

    pub fn score(
        &self,
        classifier: &dyn Classifier,
        normalized: &[f64],
    ) -> Result<RiskPrediction, SchemaMismatchError> {
        let raw = classifier.predict_probability(normalized)?;
        if !raw.is_finite() {
            return Err(SchemaMismatchError::new(
                "classifier",
                format!("{} returned a non-finite probability", classifier.name()),
            ));
        }
        let probability = raw.clamp(0.0, 1.0);

        Ok(RiskPrediction {
            probability,
            label: self.label_for(probability),
        })
    }
}
