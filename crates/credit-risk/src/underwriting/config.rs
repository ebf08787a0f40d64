use serde::{Deserialize, Serialize};

/// Decision threshold applied to the predicted default probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct RiskThreshold(f64);

impl RiskThreshold {
    pub const DEFAULT: f64 = 0.5;

    /// Returns `None` unless `value` lies within `[0, 1]`.
    pub fn new(value: f64) -> Option<Self> {
        (0.0..=1.0).contains(&value).then_some(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for RiskThreshold {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<f64> for RiskThreshold {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("threshold {value} is outside [0, 1]"))
    }
}

impl From<RiskThreshold> for f64 {
    fn from(value: RiskThreshold) -> Self {
        value.0
    }
}

/// How the debt-to-income ratio is reported for an applicant with no income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroIncomePolicy {
    /// Report the ratio as 0%.
    ReportZero,
    /// Leave the ratio undefined.
    #[default]
    Undefined,
}

impl ZeroIncomePolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "zero" | "report_zero" => Some(Self::ReportZero),
            "undefined" | "none" => Some(Self::Undefined),
            _ => None,
        }
    }
}

/// Scoring knobs that differ between deployments of the same model.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub threshold: RiskThreshold,
    pub zero_income_policy: ZeroIncomePolicy,
}
