use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Vehicle model and its on-the-road price in Rupiah.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleListing {
    pub name: String,
    pub price: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read vehicle catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid vehicle catalog data: {0}")]
    Csv(#[from] csv::Error),
    #[error("vehicle '{name}' has non-positive price {price}")]
    InvalidPrice { name: String, price: f64 },
    #[error("vehicle '{0}' is listed more than once")]
    Duplicate(String),
    #[error("vehicle catalog is empty")]
    Empty,
}

/// Price list offered on the application form, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleCatalog {
    listings: Vec<VehicleListing>,
}

const STANDARD_PRICES: [(&str, f64); 11] = [
    ("Mazda 2", 371_100_000.0),
    ("Mazda 3", 583_800_000.0),
    ("Mazda CX-3", 403_300_000.0),
    ("Mazda MX-5", 943_300_000.0),
    ("Mazda CX-30", 585_500_000.0),
    ("MAZDA CX-60", 1_188_800_000.0),
    ("MAZDA CX-5", 647_700_000.0),
    ("MAZDA 6", 717_700_000.0),
    ("MAZDA CX-9", 955_500_000.0),
    ("MAZDA CX-8", 828_800_000.0),
    ("MAZDA MX-30 EV", 860_000_000.0),
];

impl VehicleCatalog {
    /// The dealer price list the model was trained against.
    pub fn standard() -> Self {
        Self {
            listings: STANDARD_PRICES
                .iter()
                .map(|(name, price)| VehicleListing {
                    name: (*name).to_string(),
                    price: *price,
                })
                .collect(),
        }
    }

    pub fn from_listings(listings: Vec<VehicleListing>) -> Result<Self, CatalogError> {
        if listings.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for listing in &listings {
            if !(listing.price.is_finite() && listing.price > 0.0) {
                return Err(CatalogError::InvalidPrice {
                    name: listing.name.clone(),
                    price: listing.price,
                });
            }
            if !seen.insert(listing.name.as_str()) {
                return Err(CatalogError::Duplicate(listing.name.clone()));
            }
        }

        Ok(Self { listings })
    }

    /// Parse a `name,price` CSV with a header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let listings = csv_reader
            .deserialize::<VehicleListing>()
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_listings(listings)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn price_of(&self, name: &str) -> Option<f64> {
        self.listings
            .iter()
            .find(|listing| listing.name == name)
            .map(|listing| listing.price)
    }

    pub fn listings(&self) -> &[VehicleListing] {
        &self.listings
    }
}

impl Default for VehicleCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
