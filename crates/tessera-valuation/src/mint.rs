//! Mint recommendation.
//!
//! Once the approval workflow has appraised a deposit, the recommended mint
//! amount is a fixed fraction of the appraised value. Under-collateralizing
//! absorbs valuation risk; the ratio is an explicit parameter so deployments
//! can tighten or relax it without recompiling.

use rust_decimal::Decimal;

use tessera_core::rounding::floor_tokens;

use crate::error::{ValuationError, ValuationResult};

/// Recommends a token mint amount for an approved deposit.
///
/// `recommended = floor(estimated_value * collateral_ratio)`.
///
/// The ratio must lie in `(0, 1]` - a recommendation can never exceed the
/// appraised value. A zero appraised value is valid and recommends zero
/// tokens.
///
/// # Errors
///
/// - `ValuationError::InvalidValue` if `estimated_value < 0`
/// - `ValuationError::InvalidCollateralRatio` if the ratio is outside `(0, 1]`
///
/// # Example
///
/// ```rust
/// use tessera_valuation::mint::recommend_mint;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(recommend_mint(dec!(625000), dec!(0.8))?, dec!(500000));
/// # Ok::<(), tessera_valuation::ValuationError>(())
/// ```
pub fn recommend_mint(
    estimated_value: Decimal,
    collateral_ratio: Decimal,
) -> ValuationResult<Decimal> {
    if estimated_value < Decimal::ZERO {
        return Err(ValuationError::InvalidValue {
            value: estimated_value,
        });
    }
    if collateral_ratio <= Decimal::ZERO || collateral_ratio > Decimal::ONE {
        return Err(ValuationError::InvalidCollateralRatio {
            ratio: collateral_ratio,
        });
    }
    Ok(floor_tokens(estimated_value * collateral_ratio))
}
