use serde::{Deserialize, Serialize};

use super::catalog::VehicleCatalog;
use super::domain::{
    BlacklistStatus, DebtorType, HousingStatus, LoanApplication, OccupationGroup,
    VehicleSelection,
};

pub const MINIMUM_AGE: u32 = 18;

/// Raw applicant input as submitted through the HTTP API or CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanApplicationForm {
    pub vehicle_name: String,
    pub monthly_income: f64,
    #[serde(default = "default_down_payment_percent")]
    pub down_payment_percent: f64,
    #[serde(default = "default_annual_rate_percent")]
    pub annual_interest_rate_percent: f64,
    #[serde(default = "default_tenor_months")]
    pub tenor_months: u32,
    #[serde(default = "default_age")]
    pub age: u32,
    pub occupation: OccupationGroup,
    pub blacklist: BlacklistStatus,
    pub debtor_type: DebtorType,
    #[serde(default = "default_dependents")]
    pub dependents: u32,
    pub housing: HousingStatus,
}

fn default_down_payment_percent() -> f64 {
    30.0
}

fn default_annual_rate_percent() -> f64 {
    4.5
}

fn default_tenor_months() -> u32 {
    60
}

fn default_age() -> u32 {
    30
}

fn default_dependents() -> u32 {
    2
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("vehicle '{0}' is not in the price list")]
    UnknownVehicle(String),
    #[error("{field} must be {requirement}, got {value}")]
    OutOfRange {
        field: &'static str,
        requirement: &'static str,
        value: f64,
    },
}

impl LoanApplicationForm {
    /// Validate ranges and resolve the vehicle price.
    pub fn into_application(self, catalog: &VehicleCatalog) -> Result<LoanApplication, FormError> {
        let price = catalog
            .price_of(&self.vehicle_name)
            .ok_or_else(|| FormError::UnknownVehicle(self.vehicle_name.clone()))?;

        check(
            "monthly_income",
            "a non-negative amount",
            self.monthly_income,
            |value| value >= 0.0,
        )?;
        check(
            "down_payment_percent",
            "between 0 and 100",
            self.down_payment_percent,
            |value| (0.0..=100.0).contains(&value),
        )?;
        check(
            "annual_interest_rate_percent",
            "a non-negative rate",
            self.annual_interest_rate_percent,
            |value| value >= 0.0,
        )?;
        check(
            "tenor_months",
            "at least 1",
            f64::from(self.tenor_months),
            |value| value >= 1.0,
        )?;
        check(
            "age",
            "at least 18",
            f64::from(self.age),
            |value| value >= f64::from(MINIMUM_AGE),
        )?;

        Ok(LoanApplication {
            vehicle: VehicleSelection {
                name: self.vehicle_name,
                price,
            },
            down_payment_percent: self.down_payment_percent,
            annual_interest_rate_percent: self.annual_interest_rate_percent,
            tenor_months: self.tenor_months,
            monthly_income: self.monthly_income,
            age: self.age,
            occupation: self.occupation,
            blacklist: self.blacklist,
            debtor_type: self.debtor_type,
            dependents: self.dependents,
            housing: self.housing,
        })
    }
}

fn check(
    field: &'static str,
    requirement: &'static str,
    value: f64,
    accept: impl Fn(f64) -> bool,
) -> Result<(), FormError> {
    if value.is_finite() && accept(value) {
        Ok(())
    } else {
        Err(FormError::OutOfRange {
            field,
            requirement,
            value,
        })
    }
}
