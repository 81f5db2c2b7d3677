//! Rate table configuration.
//!
//! Asset unit prices are deployment configuration loaded at startup. A
//! `RateConfig` is the serializable form; [`RateConfig::build_table`]
//! produces the immutable [`RateTable`] the valuator consumes.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use tessera_core::types::{AssetKind, AssetRate, RateTable};

use crate::error::{ConfigResult, Validate, ValidationError};

/// One configured asset rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateEntry {
    /// The asset kind being priced.
    pub kind: AssetKind,
    /// Price of one unit.
    pub unit_price: Decimal,
}

/// A named rate table configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateConfig {
    /// Configuration name/identifier.
    pub name: String,

    /// Description of this configuration.
    pub description: Option<String>,

    /// When these rates were quoted (RFC 3339 in files).
    #[serde(default = "Utc::now")]
    pub as_of: DateTime<Utc>,

    /// The configured rates.
    #[serde(default)]
    pub entries: Vec<RateEntry>,

    /// Whether this configuration is read-only.
    #[serde(default)]
    pub read_only: bool,
}

impl RateConfig {
    /// Creates an empty rate configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            as_of: Utc::now(),
            entries: Vec::new(),
            read_only: false,
        }
    }

    /// The standard Pakistan deployment rates.
    ///
    /// Metals are quoted per gram in PKR; appraised asset classes are
    /// quoted at 1 so the deposited quantity is the appraised value itself.
    pub fn pk_standard() -> Self {
        Self {
            name: "PK.STANDARD".to_string(),
            description: Some("Standard PKR asset rates".to_string()),
            as_of: Utc::now(),
            entries: vec![
                RateEntry {
                    kind: AssetKind::Gold,
                    unit_price: dec!(15000),
                },
                RateEntry {
                    kind: AssetKind::Silver,
                    unit_price: dec!(150),
                },
                RateEntry {
                    kind: AssetKind::Receivable,
                    unit_price: dec!(1),
                },
                RateEntry {
                    kind: AssetKind::RealEstate,
                    unit_price: dec!(1),
                },
                RateEntry {
                    kind: AssetKind::Equipment,
                    unit_price: dec!(1),
                },
            ],
            read_only: true,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a rate entry.
    pub fn with_rate(mut self, kind: AssetKind, unit_price: Decimal) -> Self {
        self.entries.push(RateEntry { kind, unit_price });
        self
    }

    /// Builds the immutable rate table the valuator consumes.
    ///
    /// # Errors
    ///
    /// Propagates `CoreError` for non-positive prices or duplicate kinds.
    pub fn build_table(&self) -> ConfigResult<RateTable> {
        let rates = self
            .entries
            .iter()
            .map(|e| AssetRate::new(e.kind, e.unit_price))
            .collect();
        Ok(RateTable::from_rates(rates, self.as_of)?)
    }
}

impl Validate for RateConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.name.is_empty() {
            errors.push(ValidationError::new("name", "name must not be empty"));
        }
        for entry in &self.entries {
            if entry.unit_price <= Decimal::ZERO {
                errors.push(ValidationError::new(
                    "entries",
                    format!("unit price for {} must be positive", entry.kind),
                ));
            }
        }
        let mut kinds: Vec<AssetKind> = self.entries.iter().map(|e| e.kind).collect();
        kinds.sort_unstable();
        kinds.dedup();
        if kinds.len() != self.entries.len() {
            errors.push(ValidationError::new("entries", "duplicate asset kind"));
        }
        errors
    }
}
