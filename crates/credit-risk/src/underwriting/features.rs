//! Fixed model input schema and the record assembled for each application.
//!
//! Slot order matches the column order the classifier was trained with and is
//! shared by encoding, scaling and inference. The debt-to-income ratio is
//! intentionally absent: it is computed for display but was never part of the
//! trained feature set.

use serde::Serialize;

use super::amortization::AmortizationResult;
use super::domain::{LoanApplication, TrainingLabel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum FeatureSlot {
    VehicleName,
    Price,
    DownPaymentFraction,
    PeriodicRate,
    DownPaymentAmount,
    Principal,
    Tenor,
    AnnualizedPayment,
    Age,
    Occupation,
    Blacklist,
    DebtorType,
    Dependents,
    Housing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Numeric,
    Categorical,
}

impl FeatureSlot {
    pub const ALL: [FeatureSlot; 14] = [
        FeatureSlot::VehicleName,
        FeatureSlot::Price,
        FeatureSlot::DownPaymentFraction,
        FeatureSlot::PeriodicRate,
        FeatureSlot::DownPaymentAmount,
        FeatureSlot::Principal,
        FeatureSlot::Tenor,
        FeatureSlot::AnnualizedPayment,
        FeatureSlot::Age,
        FeatureSlot::Occupation,
        FeatureSlot::Blacklist,
        FeatureSlot::DebtorType,
        FeatureSlot::Dependents,
        FeatureSlot::Housing,
    ];

    /// Column name used by the training pipeline.
    pub const fn column(self) -> &'static str {
        match self {
            FeatureSlot::VehicleName => "NAME_CAR",
            FeatureSlot::Price => "PRICE_CAR",
            FeatureSlot::DownPaymentFraction => "PERCENT_DP",
            FeatureSlot::PeriodicRate => "INTEREST_RATE",
            FeatureSlot::DownPaymentAmount => "DOWN_PAYMENT",
            FeatureSlot::Principal => "AMT_CREDIT",
            FeatureSlot::Tenor => "TENOR",
            FeatureSlot::AnnualizedPayment => "AMT_ANNUITY",
            FeatureSlot::Age => "AGE",
            FeatureSlot::Occupation => "OCCUPATION_TYPE",
            FeatureSlot::Blacklist => "DATA_BLACKLIST",
            FeatureSlot::DebtorType => "DEBITUR",
            FeatureSlot::Dependents => "TOTAL_DEPENDENTS",
            FeatureSlot::Housing => "HOUSING_TYPE",
        }
    }

    pub const fn kind(self) -> SlotKind {
        match self {
            FeatureSlot::VehicleName
            | FeatureSlot::Occupation
            | FeatureSlot::Blacklist
            | FeatureSlot::DebtorType
            | FeatureSlot::Housing => SlotKind::Categorical,
            _ => SlotKind::Numeric,
        }
    }

    pub fn columns() -> Vec<&'static str> {
        Self::ALL.iter().map(|slot| slot.column()).collect()
    }

    pub fn categorical() -> impl Iterator<Item = FeatureSlot> {
        Self::ALL
            .into_iter()
            .filter(|slot| slot.kind() == SlotKind::Categorical)
    }

    /// Training labels for slots with a closed vocabulary; `None` for open ones.
    pub fn closed_vocabulary(self) -> Option<Vec<&'static str>> {
        use super::domain::{BlacklistStatus, DebtorType, HousingStatus, OccupationGroup};

        match self {
            FeatureSlot::Occupation => Some(OccupationGroup::labels()),
            FeatureSlot::Blacklist => Some(BlacklistStatus::labels()),
            FeatureSlot::DebtorType => Some(DebtorType::labels()),
            FeatureSlot::Housing => Some(HousingStatus::labels()),
            _ => None,
        }
    }
}

/// Raw value of a slot before categorical encoding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FeatureValue {
    Numeric(f64),
    Category(String),
}

/// One value per [`FeatureSlot`], in schema order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRecord {
    values: Vec<(FeatureSlot, FeatureValue)>,
}

impl FeatureRecord {
    pub fn iter(&self) -> impl Iterator<Item = &(FeatureSlot, FeatureValue)> {
        self.values.iter()
    }

    pub fn get(&self, slot: FeatureSlot) -> Option<&FeatureValue> {
        self.values
            .iter()
            .find(|(candidate, _)| *candidate == slot)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Fully numeric vector tagged with the column order it was produced in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector {
    pub columns: Vec<String>,
    pub values: Vec<f64>,
}

impl FeatureVector {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

pub struct FeatureVectorBuilder;

impl FeatureVectorBuilder {
    pub fn build(application: &LoanApplication, amortization: &AmortizationResult) -> FeatureRecord {
        let values = FeatureSlot::ALL
            .into_iter()
            .map(|slot| (slot, Self::value_for(slot, application, amortization)))
            .collect();

        FeatureRecord { values }
    }

    fn value_for(
        slot: FeatureSlot,
        application: &LoanApplication,
        amortization: &AmortizationResult,
    ) -> FeatureValue {
        use FeatureValue::{Category, Numeric};

        match slot {
            FeatureSlot::VehicleName => Category(application.vehicle.name.clone()),
            FeatureSlot::Price => Numeric(amortization.price),
            FeatureSlot::DownPaymentFraction => Numeric(application.down_payment_fraction()),
            FeatureSlot::PeriodicRate => Numeric(amortization.periodic_rate),
            FeatureSlot::DownPaymentAmount => Numeric(amortization.down_payment),
            FeatureSlot::Principal => Numeric(amortization.principal),
            FeatureSlot::Tenor => Numeric(f64::from(application.tenor_months)),
            FeatureSlot::AnnualizedPayment => Numeric(amortization.annualized_payment),
            FeatureSlot::Age => Numeric(f64::from(application.age)),
            FeatureSlot::Occupation => Category(application.occupation.label().to_string()),
            FeatureSlot::Blacklist => Category(application.blacklist.label().to_string()),
            FeatureSlot::DebtorType => Category(application.debtor_type.label().to_string()),
            FeatureSlot::Dependents => Numeric(f64::from(application.dependents)),
            FeatureSlot::Housing => Category(application.housing.label().to_string()),
        }
    }
}
