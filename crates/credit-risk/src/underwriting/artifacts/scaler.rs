use serde::{Deserialize, Serialize};

use super::super::features::FeatureVector;
use super::SchemaMismatchError;

/// Per-column standardisation fitted at training time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureScaler {
    pub feature_names: Vec<String>,
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl FeatureScaler {
    /// Checks the fitted statistics line up with the fitted column list.
    pub fn check_consistency(&self) -> Result<(), SchemaMismatchError> {
        let width = self.feature_names.len();
        if self.mean.len() != width || self.scale.len() != width {
            return Err(SchemaMismatchError::new(
                "scaler",
                format!(
                    "{} columns but {} means and {} scales",
                    width,
                    self.mean.len(),
                    self.scale.len()
                ),
            ));
        }
        if let Some(position) = self
            .mean
            .iter()
            .chain(self.scale.iter())
            .position(|value| !value.is_finite())
        {
            return Err(SchemaMismatchError::new(
                "scaler",
                format!("non-finite statistic at position {position}"),
            ));
        }
        Ok(())
    }

    pub fn transform(&self, input: &FeatureVector) -> Result<FeatureVector, SchemaMismatchError> {
        if input.columns != self.feature_names || input.values.len() != self.feature_names.len() {
            return Err(SchemaMismatchError::new(
                "scaler",
                format!(
                    "fitted on [{}] but received [{}]",
                    self.feature_names.join(", "),
                    input.columns.join(", ")
                ),
            ));
        }

        let values = input
            .values
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(value, (mean, scale))| {
                let divisor = if *scale == 0.0 { 1.0 } else { *scale };
                (value - mean) / divisor
            })
            .collect();

        Ok(FeatureVector {
            columns: input.columns.clone(),
            values,
        })
    }
}
