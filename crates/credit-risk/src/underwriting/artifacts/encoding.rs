use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::super::features::{FeatureRecord, FeatureValue, FeatureVector};
use super::SchemaMismatchError;

/// Raised when an applicant value was never observed while training.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category '{value}' for column {column}")]
pub struct UnknownCategoryError {
    pub column: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EncodingError {
    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategoryError),
    #[error(transparent)]
    SchemaMismatch(#[from] SchemaMismatchError),
}

/// Closed vocabulary for one column; a category's code is its class position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct CategoricalEncoder {
    classes: Vec<String>,
    codes: HashMap<String, u32>,
}

impl CategoricalEncoder {
    pub fn new(classes: Vec<String>) -> Result<Self, String> {
        let mut codes = HashMap::with_capacity(classes.len());
        for (position, class) in classes.iter().enumerate() {
            let code = u32::try_from(position)
                .map_err(|_| "encoder vocabulary exceeds u32 codes".to_string())?;
            if codes.insert(class.clone(), code).is_some() {
                return Err(format!("duplicate encoder class '{class}'"));
            }
        }
        Ok(Self { classes, codes })
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn contains(&self, raw: &str) -> bool {
        self.codes.contains_key(raw)
    }

    pub fn code(&self, raw: &str) -> Option<u32> {
        self.codes.get(raw).copied()
    }
}

impl TryFrom<Vec<String>> for CategoricalEncoder {
    type Error = String;

    fn try_from(classes: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(classes)
    }
}

impl From<CategoricalEncoder> for Vec<String> {
    fn from(encoder: CategoricalEncoder) -> Self {
        encoder.classes
    }
}

/// Independent encoder per categorical column, keyed by training column name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncoderRegistry {
    encoders: BTreeMap<String, CategoricalEncoder>,
}

impl EncoderRegistry {
    pub fn insert(&mut self, column: impl Into<String>, encoder: CategoricalEncoder) {
        self.encoders.insert(column.into(), encoder);
    }

    pub fn get(&self, column: &str) -> Option<&CategoricalEncoder> {
        self.encoders.get(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.encoders.keys().map(String::as_str)
    }

    pub fn encode(&self, column: &str, raw: &str) -> Result<u32, EncodingError> {
        let encoder = self.get(column).ok_or_else(|| {
            SchemaMismatchError::new("encoders", format!("no encoder registered for {column}"))
        })?;

        encoder.code(raw).ok_or_else(|| {
            UnknownCategoryError {
                column: column.to_string(),
                value: raw.to_string(),
            }
            .into()
        })
    }

    /// Replace every categorical slot with its code, keeping slot order.
    pub fn encode_record(&self, record: &FeatureRecord) -> Result<FeatureVector, EncodingError> {
        let mut columns = Vec::with_capacity(record.len());
        let mut values = Vec::with_capacity(record.len());

        for (slot, value) in record.iter() {
            let column = slot.column();
            let numeric = match value {
                FeatureValue::Numeric(number) => *number,
                FeatureValue::Category(raw) => f64::from(self.encode(column, raw)?),
            };
            columns.push(column.to_string());
            values.push(numeric);
        }

        Ok(FeatureVector { columns, values })
    }
}
