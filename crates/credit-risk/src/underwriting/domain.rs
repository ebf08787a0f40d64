use serde::{Deserialize, Serialize};

/// Vehicle being financed, resolved from the price catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSelection {
    pub name: String,
    pub price: f64,
}

/// Validated applicant submission; immutable once handed to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanApplication {
    pub vehicle: VehicleSelection,
    pub down_payment_percent: f64,
    pub annual_interest_rate_percent: f64,
    pub tenor_months: u32,
    pub monthly_income: f64,
    pub age: u32,
    pub occupation: OccupationGroup,
    pub blacklist: BlacklistStatus,
    pub debtor_type: DebtorType,
    pub dependents: u32,
    pub housing: HousingStatus,
}

impl LoanApplication {
    /// Monthly rate as a fraction, e.g. 4.5% a year becomes 0.00375.
    pub fn periodic_rate(&self) -> f64 {
        self.annual_interest_rate_percent / (100.0 * 12.0)
    }

    pub fn down_payment_fraction(&self) -> f64 {
        self.down_payment_percent / 100.0
    }
}

/// Closed vocabularies whose training labels feed a categorical encoder.
pub trait TrainingLabel: Copy + 'static {
    const VARIANTS: &'static [Self];

    fn label(self) -> &'static str;

    fn from_label(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.label() == trimmed)
    }

    fn labels() -> Vec<&'static str> {
        Self::VARIANTS.iter().map(|variant| variant.label()).collect()
    }
}

/// Occupation risk groups used by the lender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OccupationGroup {
    #[serde(rename = "Kelompok A")]
    GroupA,
    #[serde(rename = "Kelompok B")]
    GroupB,
    #[serde(rename = "Kelompok C")]
    GroupC,
    #[serde(rename = "Kelompok D")]
    GroupD,
    #[serde(rename = "Kelompok E")]
    GroupE,
}

impl TrainingLabel for OccupationGroup {
    const VARIANTS: &'static [Self] = &[
        Self::GroupA,
        Self::GroupB,
        Self::GroupC,
        Self::GroupD,
        Self::GroupE,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::GroupA => "Kelompok A",
            Self::GroupB => "Kelompok B",
            Self::GroupC => "Kelompok C",
            Self::GroupD => "Kelompok D",
            Self::GroupE => "Kelompok E",
        }
    }
}

/// Whether the applicant appears on the credit blacklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlacklistStatus {
    #[serde(rename = "Ada")]
    Listed,
    #[serde(rename = "Tidak Ada")]
    NotListed,
}

impl TrainingLabel for BlacklistStatus {
    const VARIANTS: &'static [Self] = &[Self::Listed, Self::NotListed];

    fn label(self) -> &'static str {
        match self {
            Self::Listed => "Ada",
            Self::NotListed => "Tidak Ada",
        }
    }
}

/// New applicant versus an existing customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DebtorType {
    #[serde(rename = "Baru")]
    New,
    #[serde(rename = "Lama")]
    Existing,
}

impl TrainingLabel for DebtorType {
    const VARIANTS: &'static [Self] = &[Self::New, Self::Existing];

    fn label(self) -> &'static str {
        match self {
            Self::New => "Baru",
            Self::Existing => "Lama",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HousingStatus {
    #[serde(rename = "Milik Sendiri")]
    Owned,
    #[serde(rename = "Milik Orang Tua")]
    ParentsOwned,
}

impl TrainingLabel for HousingStatus {
    const VARIANTS: &'static [Self] = &[Self::Owned, Self::ParentsOwned];

    fn label(self) -> &'static str {
        match self {
            Self::Owned => "Milik Sendiri",
            Self::ParentsOwned => "Milik Orang Tua",
        }
    }
}
