//! Redemption validation.
//!
//! Computes the cost of redeeming a benefit against a holder's health-token
//! balance. Two different failure taxonomies meet here:
//!
//! - a request for more units than the catalog has is a request-shape error
//!   and fails loudly (`InsufficientInventory`)
//! - an insufficient balance is an expected business outcome: the quote is
//!   still returned, with `allowed = false` and a negative `balance_after`,
//!   so callers can display the deficit
//!
//! The validator never debits the balance or decrements inventory; that
//! transactional step belongs to the caller.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AllocationError, AllocationResult};

/// The computed cost and outcome of a proposed redemption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedemptionQuote {
    /// Total cost of the requested units: `unit_cost * quantity`.
    pub total_cost: Decimal,
    /// Balance remaining after the redemption. Negative when the holder
    /// cannot afford it.
    pub balance_after: Decimal,
    /// True if the redemption may proceed (`balance_after >= 0`).
    pub allowed: bool,
}

impl RedemptionQuote {
    /// The shortfall when the redemption is not allowed.
    ///
    /// Returns `None` for an allowed redemption, otherwise the positive
    /// amount the holder is short by.
    #[must_use]
    pub fn deficit(&self) -> Option<Decimal> {
        if self.allowed {
            None
        } else {
            Some(-self.balance_after)
        }
    }
}

/// Validates a proposed benefit redemption.
///
/// # Errors
///
/// - `AllocationError::InvalidUnitCost` if `unit_cost <= 0`
/// - `AllocationError::InsufficientInventory` if `quantity` is zero or
///   exceeds `available_units`
///
/// An unaffordable redemption is NOT an error; the quote comes back with
/// `allowed = false`.
///
/// # Example
///
/// ```rust
/// use tessera_allocation::redemption::validate_redemption;
/// use rust_decimal_macros::dec;
///
/// let quote = validate_redemption(dec!(100), dec!(50), 2, 5)?;
/// assert_eq!(quote.total_cost, dec!(100));
/// assert_eq!(quote.balance_after, dec!(0));
/// assert!(quote.allowed);
/// # Ok::<(), tessera_allocation::AllocationError>(())
/// ```
pub fn validate_redemption(
    balance: Decimal,
    unit_cost: Decimal,
    quantity: u32,
    available_units: u32,
) -> AllocationResult<RedemptionQuote> {
    if unit_cost <= Decimal::ZERO {
        return Err(AllocationError::InvalidUnitCost { unit_cost });
    }
    if quantity == 0 || quantity > available_units {
        return Err(AllocationError::InsufficientInventory {
            requested: quantity,
            available: available_units,
        });
    }

    let total_cost = unit_cost * Decimal::from(quantity);
    let balance_after = balance - total_cost;

    Ok(RedemptionQuote {
        total_cost,
        balance_after,
        allowed: balance_after >= Decimal::ZERO,
    })
}
