//! Reducing-balance loan math: payment schedule and affordability ratio.

use serde::{Deserialize, Serialize};

use super::config::ZeroIncomePolicy;
use super::domain::LoanApplication;

/// Figures derived once per application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationResult {
    pub price: f64,
    pub down_payment: f64,
    pub principal: f64,
    pub periodic_rate: f64,
    pub periodic_payment: f64,
    pub annualized_payment: f64,
    pub total_interest: f64,
    /// `None` when income is zero under [`ZeroIncomePolicy::Undefined`].
    pub debt_to_income: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum AmortizationError {
    #[error("loan tenor must be at least one month")]
    ZeroTenor,
    #[error("loan terms produce a non-finite payment (rate {periodic_rate}, tenor {tenor})")]
    NonFinitePayment { periodic_rate: f64, tenor: u32 },
}

/// Periodic payment for `principal` over `tenor` periods at `periodic_rate`.
///
/// `P * r / (1 - (1 + r)^-n)`, with the discount factor taken through
/// `ln_1p`/`exp_m1`. Non-finite results are rejected.
pub fn periodic_payment(
    principal: f64,
    periodic_rate: f64,
    tenor: u32,
) -> Result<f64, AmortizationError> {
    if tenor == 0 {
        return Err(AmortizationError::ZeroTenor);
    }
    let periods = f64::from(tenor);

    if periodic_rate == 0.0 {
        return Ok(principal / periods);
    }

    let discount = -(-periods * periodic_rate.ln_1p()).exp_m1();
    let payment = principal * periodic_rate / discount;

    if payment.is_finite() {
        Ok(payment)
    } else {
        Err(AmortizationError::NonFinitePayment {
            periodic_rate,
            tenor,
        })
    }
}

/// Payment as a percentage of monthly income.
pub fn debt_to_income(payment: f64, monthly_income: f64, policy: ZeroIncomePolicy) -> Option<f64> {
    if monthly_income > 0.0 {
        return Some(payment / monthly_income * 100.0);
    }

    match policy {
        ZeroIncomePolicy::ReportZero => Some(0.0),
        ZeroIncomePolicy::Undefined => None,
    }
}

pub struct AmortizationCalculator {
    policy: ZeroIncomePolicy,
}

impl AmortizationCalculator {
    pub fn new(policy: ZeroIncomePolicy) -> Self {
        Self { policy }
    }

    pub fn assess(
        &self,
        application: &LoanApplication,
    ) -> Result<AmortizationResult, AmortizationError> {
        let price = application.vehicle.price;
        let down_payment = price * application.down_payment_fraction();
        let principal = price - down_payment;
        let periodic_rate = application.periodic_rate();

        let payment = periodic_payment(principal, periodic_rate, application.tenor_months)?;
        let total_interest = payment * f64::from(application.tenor_months) - principal;
        let debt_to_income = debt_to_income(payment, application.monthly_income, self.policy);

        tracing::debug!(
            vehicle = %application.vehicle.name,
            principal,
            periodic_rate,
            payment,
            ?debt_to_income,
            "amortization computed"
        );

        Ok(AmortizationResult {
            price,
            down_payment,
            principal,
            periodic_rate,
            periodic_payment: payment,
            annualized_payment: payment * 12.0,
            total_interest,
            debt_to_income,
        })
    }
}
