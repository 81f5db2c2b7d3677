//! Deposit valuation.
//!
//! Converts a submitted asset deposit into monetary worth and an estimated
//! asset-token count. The estimate is what a patient sees on the deposit
//! form before the approval workflow runs; the authoritative mint amount
//! comes later from [`recommend_mint`](crate::mint::recommend_mint) against
//! the appraised value.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tessera_core::rounding::floor_tokens;
use tessera_core::types::{AssetKind, RateTable};

use crate::error::{ValuationError, ValuationResult};

/// The result of valuating a deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositValuation {
    /// The deposited asset kind.
    pub kind: AssetKind,
    /// The deposited quantity (grams for metals, monetary units of
    /// appraised value otherwise).
    pub quantity: Decimal,
    /// The unit price applied, taken from the rate table.
    pub unit_price: Decimal,
    /// Monetary worth: `quantity * unit_price`.
    pub worth: Decimal,
    /// Whole asset tokens the worth converts to, floored.
    pub estimated_tokens: Decimal,
}

/// Valuates a deposit against a rate table.
///
/// `conversion_rate` is the number of monetary units one asset token
/// represents; worth is divided by it and floored to whole tokens.
///
/// # Errors
///
/// - `ValuationError::InvalidQuantity` if `quantity <= 0`
/// - `ValuationError::InvalidConversionRate` if `conversion_rate <= 0`
/// - `ValuationError::UnknownAssetKind` if the rate table does not price
///   `kind`
///
/// # Example
///
/// ```rust
/// use tessera_core::prelude::*;
/// use tessera_valuation::deposit::valuate;
/// use chrono::Utc;
/// use rust_decimal_macros::dec;
///
/// let rates = RateTable::from_rates(
///     vec![AssetRate::new(AssetKind::Silver, dec!(150))],
///     Utc::now(),
/// )?;
///
/// let valuation = valuate(AssetKind::Silver, dec!(250), &rates, dec!(100))?;
/// assert_eq!(valuation.worth, dec!(37500));
/// assert_eq!(valuation.estimated_tokens, dec!(375));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn valuate(
    kind: AssetKind,
    quantity: Decimal,
    rates: &RateTable,
    conversion_rate: Decimal,
) -> ValuationResult<DepositValuation> {
    if quantity <= Decimal::ZERO {
        return Err(ValuationError::InvalidQuantity { quantity });
    }
    if conversion_rate <= Decimal::ZERO {
        return Err(ValuationError::InvalidConversionRate {
            rate: conversion_rate,
        });
    }
    let unit_price = rates
        .unit_price(kind)
        .ok_or(ValuationError::UnknownAssetKind { kind })?;

    let worth = quantity * unit_price;
    let estimated_tokens = floor_tokens(worth / conversion_rate);

    Ok(DepositValuation {
        kind,
        quantity,
        unit_price,
        worth,
        estimated_tokens,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;
    use tessera_core::types::AssetRate;

    fn rates() -> RateTable {
        RateTable::from_rates(
            vec![
                AssetRate::new(AssetKind::Gold, dec!(15000)),
                AssetRate::new(AssetKind::Silver, dec!(150)),
            ],
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn test_gold_scenario() {
        // 10 g of gold at 15000/g with 100 monetary units per token
        let v = valuate(AssetKind::Gold, dec!(10), &rates(), dec!(100)).unwrap();
        assert_eq!(v.worth, dec!(150000));
        assert_eq!(v.estimated_tokens, dec!(1500));
        assert_eq!(v.unit_price, dec!(15000));
    }

    #[test]
    fn test_fractional_tokens_floor() {
        // 1.5 g of silver = 225, which is 2.25 tokens at rate 100
        let v = valuate(AssetKind::Silver, dec!(1.5), &rates(), dec!(100)).unwrap();
        assert_eq!(v.worth, dec!(225));
        assert_eq!(v.estimated_tokens, dec!(2));
    }

    #[test]
    fn test_rejects_non_positive_quantity() {
        let err = valuate(AssetKind::Gold, dec!(0), &rates(), dec!(100)).unwrap_err();
        assert!(matches!(err, ValuationError::InvalidQuantity { .. }));

        let err = valuate(AssetKind::Gold, dec!(-3), &rates(), dec!(100)).unwrap_err();
        assert!(matches!(err, ValuationError::InvalidQuantity { .. }));
    }

    #[test]
    fn test_rejects_unpriced_kind() {
        let err = valuate(AssetKind::Equipment, dec!(1), &rates(), dec!(100)).unwrap_err();
        assert_eq!(
            err,
            ValuationError::UnknownAssetKind {
                kind: AssetKind::Equipment
            }
        );
    }

    #[test]
    fn test_rejects_non_positive_conversion_rate() {
        let err = valuate(AssetKind::Gold, dec!(1), &rates(), dec!(0)).unwrap_err();
        assert!(matches!(err, ValuationError::InvalidConversionRate { .. }));
    }

    proptest! {
        // worth is linear in quantity: doubling the deposit doubles the worth
        #[test]
        fn prop_worth_is_linear(grams in 1u64..=1_000_000) {
            let rates = rates();
            let q = Decimal::from(grams);
            let single = valuate(AssetKind::Gold, q, &rates, dec!(100)).unwrap();
            let double = valuate(AssetKind::Gold, q * dec!(2), &rates, dec!(100)).unwrap();
            prop_assert_eq!(double.worth, single.worth * dec!(2));
        }

        // the token estimate never overstates the worth
        #[test]
        fn prop_tokens_never_overstate_worth(grams in 1u64..=1_000_000) {
            let rates = rates();
            let v = valuate(AssetKind::Silver, Decimal::from(grams), &rates, dec!(100)).unwrap();
            prop_assert!(v.estimated_tokens * dec!(100) <= v.worth);
        }
    }
}
