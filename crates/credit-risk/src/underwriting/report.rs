use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::LoanApplication;
use super::engine::Evaluation;
use super::scorer::RiskLabel;

/// Public view of an evaluation, as rendered by the API and CLI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub vehicle_name: String,
    pub price: f64,
    pub down_payment: f64,
    pub credit_amount: f64,
    pub monthly_payment: f64,
    pub total_interest: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debt_to_income_percent: Option<f64>,
    pub default_probability: f64,
    pub label: RiskLabel,
    pub label_code: u8,
    pub threshold: f64,
    pub advisory: String,
    pub evaluated_at: DateTime<Utc>,
}

impl EvaluationReport {
    pub fn new(
        application: &LoanApplication,
        evaluation: &Evaluation,
        threshold: f64,
        evaluated_at: DateTime<Utc>,
    ) -> Self {
        let amortization = &evaluation.amortization;
        let prediction = &evaluation.prediction;

        Self {
            vehicle_name: application.vehicle.name.clone(),
            price: amortization.price,
            down_payment: amortization.down_payment,
            credit_amount: amortization.principal,
            monthly_payment: amortization.periodic_payment,
            total_interest: amortization.total_interest,
            debt_to_income_percent: amortization.debt_to_income,
            default_probability: prediction.probability,
            label: prediction.label,
            label_code: prediction.label.code(),
            threshold,
            advisory: advisory(prediction.label).to_string(),
            evaluated_at,
        }
    }

    pub fn debt_to_income_display(&self) -> String {
        match self.debt_to_income_percent {
            Some(ratio) => format!("{ratio:.2}%"),
            None => "undefined (no income)".to_string(),
        }
    }
}

pub fn advisory(label: RiskLabel) -> &'static str {
    match label {
        RiskLabel::Default => {
            "Warning: credit risk is elevated, consider further evaluation before approval."
        }
        RiskLabel::Current => "Credit appears sound based on the submitted data.",
    }
}

/// Format an amount as `Rp 1,234,567.89`.
pub fn format_rupiah(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}Rp {grouped}.{fraction}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_thousands_separators() {
        assert_eq!(format_rupiah(371_100_000.0), "Rp 371,100,000.00");
        assert_eq!(format_rupiah(4_842_897.108), "Rp 4,842,897.11");
        assert_eq!(format_rupiah(999.5), "Rp 999.50");
        assert_eq!(format_rupiah(0.0), "Rp 0.00");
        assert_eq!(format_rupiah(-1_500.0), "-Rp 1,500.00");
    }

    #[test]
    fn advisory_follows_label() {
        assert!(advisory(RiskLabel::Default).starts_with("Warning"));
        assert!(advisory(RiskLabel::Current).contains("sound"));
    }
}
