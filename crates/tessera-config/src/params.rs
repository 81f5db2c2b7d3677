//! Business parameter profiles.
//!
//! The business constants of the platform - how many monetary units one
//! asset token represents, the mint collateralization ratio, the default
//! patient share of trading profit, and the health-token conversion rate -
//! are deployment configuration, never literals in the calculators. The
//! source system quoted several mutually inconsistent values for these
//! across its pages; a profile pins them per deployment.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{Validate, ValidationError};

fn default_token_conversion_rate() -> Decimal {
    dec!(100)
}

fn default_collateral_ratio() -> Decimal {
    dec!(0.8)
}

fn default_patient_share_pct() -> Decimal {
    dec!(70)
}

fn default_ht_conversion_rate() -> Decimal {
    dec!(10)
}

/// Business parameters for one deployment.
///
/// # Example
///
/// ```rust
/// use tessera_config::BusinessParams;
/// use rust_decimal_macros::dec;
///
/// let params = BusinessParams::new("MY.CUSTOM")
///     .with_collateral_ratio(dec!(0.75))
///     .with_description("Tighter collateralization");
/// assert_eq!(params.collateral_ratio, dec!(0.75));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessParams {
    /// Configuration name/identifier.
    pub name: String,

    /// Description of this configuration.
    pub description: Option<String>,

    /// Monetary units one asset token (AT) represents.
    #[serde(default = "default_token_conversion_rate")]
    pub token_conversion_rate: Decimal,

    /// Fraction of appraised value recommended for minting, in (0, 1].
    #[serde(default = "default_collateral_ratio")]
    pub collateral_ratio: Decimal,

    /// Default percentage of trading profit allocated to patients, [0, 100].
    #[serde(default = "default_patient_share_pct")]
    pub patient_share_pct: Decimal,

    /// Monetary units one health token (HT) represents.
    #[serde(default = "default_ht_conversion_rate")]
    pub ht_conversion_rate: Decimal,

    /// Whether this configuration is read-only.
    #[serde(default)]
    pub read_only: bool,

    /// Timestamp when configuration was created.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    /// Timestamp when configuration was last updated.
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl BusinessParams {
    /// Creates a new parameter profile with platform defaults.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            description: None,
            token_conversion_rate: default_token_conversion_rate(),
            collateral_ratio: default_collateral_ratio(),
            patient_share_pct: default_patient_share_pct(),
            ht_conversion_rate: default_ht_conversion_rate(),
            read_only: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// The standard Pakistan deployment profile.
    pub fn pk_standard() -> Self {
        Self {
            name: "PK.STANDARD".to_string(),
            description: Some("Standard PKR deployment parameters".to_string()),
            token_conversion_rate: dec!(100),
            collateral_ratio: dec!(0.8),
            patient_share_pct: dec!(70),
            ht_conversion_rate: dec!(10),
            read_only: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    /// A small-denomination profile used by unit tests.
    pub fn test_unit() -> Self {
        Self {
            name: "TEST.UNIT".to_string(),
            description: Some("Unit-denomination parameters for tests".to_string()),
            token_conversion_rate: dec!(1),
            collateral_ratio: dec!(1),
            patient_share_pct: dec!(100),
            ht_conversion_rate: dec!(1),
            read_only: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the asset-token conversion rate.
    pub fn with_token_conversion_rate(mut self, rate: Decimal) -> Self {
        self.token_conversion_rate = rate;
        self
    }

    /// Sets the collateralization ratio.
    pub fn with_collateral_ratio(mut self, ratio: Decimal) -> Self {
        self.collateral_ratio = ratio;
        self
    }

    /// Sets the default patient share percentage.
    pub fn with_patient_share_pct(mut self, pct: Decimal) -> Self {
        self.patient_share_pct = pct;
        self
    }

    /// Sets the health-token conversion rate.
    pub fn with_ht_conversion_rate(mut self, rate: Decimal) -> Self {
        self.ht_conversion_rate = rate;
        self
    }
}

impl Validate for BusinessParams {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.name.is_empty() {
            errors.push(ValidationError::new("name", "name must not be empty"));
        }
        if self.token_conversion_rate <= Decimal::ZERO {
            errors.push(ValidationError::new(
                "token_conversion_rate",
                "must be positive",
            ));
        }
        if self.collateral_ratio <= Decimal::ZERO || self.collateral_ratio > Decimal::ONE {
            errors.push(ValidationError::new(
                "collateral_ratio",
                "must be in (0, 1]",
            ));
        }
        if self.patient_share_pct < Decimal::ZERO || self.patient_share_pct > Decimal::ONE_HUNDRED
        {
            errors.push(ValidationError::new(
                "patient_share_pct",
                "must be in [0, 100]",
            ));
        }
        if self.ht_conversion_rate <= Decimal::ZERO {
            errors.push(ValidationError::new("ht_conversion_rate", "must be positive"));
        }
        errors
    }
}
