//! The workspace-wide rounding policy.
//!
//! All intermediate arithmetic in Tessera runs at full `Decimal` precision;
//! rounding happens exactly once, at the result boundary, through the
//! functions in this module. The chosen rule is round-half-up
//! (`MidpointAwayFromZero`) at two decimal places, matching monetary
//! convention.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places kept in stored monetary and token amounts.
pub const MONEY_DP: u32 = 2;

/// Rounds a monetary or token amount to [`MONEY_DP`] places, half-up.
///
/// # Example
///
/// ```rust
/// use tessera_core::rounding::round_money;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round_money(dec!(806.4516)), dec!(806.45));
/// assert_eq!(round_money(dec!(2.005)), dec!(2.01));
/// ```
#[must_use]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Truncates a token count downward to a whole number of tokens.
///
/// Mint estimates and recommendations never round up: a deposit worth
/// 1500.9 token-units mints 1500 tokens.
#[must_use]
pub fn floor_tokens(value: Decimal) -> Decimal {
    value.floor()
}

/// Worst-case drift between a sum of rounded amounts and the rounded sum.
///
/// Each rounded amount differs from its full-precision value by at most
/// half of the last kept digit, so a sum over `n` entries may drift by
/// `n * 0.5 * 10^-MONEY_DP`. Callers assert this bound rather than hiding
/// the discrepancy.
#[must_use]
pub fn rounding_tolerance(entries: usize) -> Decimal {
    // 0.5 * 10^-MONEY_DP == 0.005 for two decimal places
    let half_ulp = Decimal::new(5, MONEY_DP + 1);
    half_ulp * Decimal::from(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_money_half_up() {
        assert_eq!(round_money(dec!(1.005)), dec!(1.01));
        assert_eq!(round_money(dec!(1.004)), dec!(1.00));
        assert_eq!(round_money(dec!(-1.005)), dec!(-1.01));
    }

    #[test]
    fn test_round_money_idempotent() {
        let once = round_money(dec!(806.4516));
        assert_eq!(round_money(once), once);
    }

    #[test]
    fn test_floor_tokens() {
        assert_eq!(floor_tokens(dec!(1500.99)), dec!(1500));
        assert_eq!(floor_tokens(dec!(1500)), dec!(1500));
        assert_eq!(floor_tokens(dec!(0.4)), dec!(0));
    }

    #[test]
    fn test_rounding_tolerance() {
        assert_eq!(rounding_tolerance(1), dec!(0.005));
        assert_eq!(rounding_tolerance(5), dec!(0.025));
        assert_eq!(rounding_tolerance(0), dec!(0));
    }
}
