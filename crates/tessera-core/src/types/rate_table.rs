//! Asset rate reference data.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::AssetKind;
use crate::error::{CoreError, CoreResult};

/// The unit price of one asset kind.
///
/// For metals the unit is one gram; for appraised assets the unit is one
/// monetary unit of appraised value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRate {
    /// The asset kind this rate prices.
    pub kind: AssetKind,
    /// Price of one unit, in the deployment's monetary denomination.
    pub unit_price: Decimal,
}

impl AssetRate {
    /// Creates a new rate. The price is validated when the rate enters a
    /// [`RateTable`].
    #[must_use]
    pub fn new(kind: AssetKind, unit_price: Decimal) -> Self {
        Self { kind, unit_price }
    }

    /// Validates that the unit price is positive.
    pub fn validate(&self) -> CoreResult<()> {
        if self.unit_price <= Decimal::ZERO {
            return Err(CoreError::InvalidRate {
                kind: self.kind,
                unit_price: self.unit_price,
            });
        }
        Ok(())
    }
}

/// Static reference data mapping asset kinds to unit prices.
///
/// Loaded once at startup from configuration and immutable for the life of
/// a session. Lookups are by [`AssetKind`]; a kind absent from the table is
/// a caller error surfaced by the valuator, not by the table itself.
///
/// # Example
///
/// ```rust
/// use tessera_core::types::{AssetKind, AssetRate, RateTable};
/// use chrono::Utc;
/// use rust_decimal_macros::dec;
///
/// let table = RateTable::from_rates(
///     vec![
///         AssetRate::new(AssetKind::Gold, dec!(15000)),
///         AssetRate::new(AssetKind::Silver, dec!(150)),
///     ],
///     Utc::now(),
/// )?;
///
/// assert_eq!(table.unit_price(AssetKind::Gold), Some(dec!(15000)));
/// assert_eq!(table.unit_price(AssetKind::Equipment), None);
/// # Ok::<(), tessera_core::CoreError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    /// Rates keyed by asset kind.
    rates: BTreeMap<AssetKind, AssetRate>,
    /// When the rates were last refreshed.
    as_of: DateTime<Utc>,
}

impl RateTable {
    /// Builds a table from a list of rates.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidRate` for a non-positive unit price and
    /// `CoreError::DuplicateRate` if a kind appears more than once.
    pub fn from_rates(rates: Vec<AssetRate>, as_of: DateTime<Utc>) -> CoreResult<Self> {
        let mut map = BTreeMap::new();
        for rate in rates {
            rate.validate()?;
            if map.insert(rate.kind, rate).is_some() {
                return Err(CoreError::DuplicateRate { kind: rate.kind });
            }
        }
        Ok(Self { rates: map, as_of })
    }

    /// Looks up the rate for a kind.
    #[must_use]
    pub fn get(&self, kind: AssetKind) -> Option<&AssetRate> {
        self.rates.get(&kind)
    }

    /// Looks up just the unit price for a kind.
    #[must_use]
    pub fn unit_price(&self, kind: AssetKind) -> Option<Decimal> {
        self.rates.get(&kind).map(|r| r.unit_price)
    }

    /// Returns when the rates were last refreshed.
    #[must_use]
    pub fn as_of(&self) -> DateTime<Utc> {
        self.as_of
    }

    /// Returns the kinds priced by this table, in canonical order.
    pub fn kinds(&self) -> impl Iterator<Item = AssetKind> + '_ {
        self.rates.keys().copied()
    }

    /// Returns the number of rates in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the table prices no kinds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
