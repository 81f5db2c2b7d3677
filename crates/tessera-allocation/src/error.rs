//! Error types for allocation and redemption operations.
//!
//! Every variant here is an input-shape error. Expected business outcomes -
//! an empty holder set, an insufficient balance - are never errors: the
//! engine returns an empty allocation list and the redemption validator
//! returns a quote with `allowed = false`, so callers cannot confuse
//! "nothing to allocate" with "malformed request".

use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for allocation operations.
pub type AllocationResult<T> = Result<T, AllocationError>;

/// Errors raised by the allocation engine and redemption validator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AllocationError {
    /// Patient share percentage outside [0, 100].
    #[error("Invalid share percentage: {pct} - must be in [0, 100]")]
    InvalidSharePercentage {
        /// The offending percentage.
        pct: Decimal,
    },

    /// Profit pool total was negative.
    #[error("Invalid profit: {profit} - total profit must be non-negative")]
    InvalidProfit {
        /// The offending profit figure.
        profit: Decimal,
    },

    /// Health-token conversion rate was zero or negative.
    #[error("Invalid conversion rate: {rate} - rate must be positive")]
    InvalidConversionRate {
        /// The offending rate.
        rate: Decimal,
    },

    /// The same holder appeared twice in the holdings snapshot.
    #[error("Duplicate holder in snapshot: {holder_id}")]
    DuplicateHolder {
        /// The duplicated holder identifier.
        holder_id: String,
    },

    /// A holder carried a negative holding balance.
    #[error("Invalid holding for {holder_id}: {amount} - holdings must be non-negative")]
    InvalidHolding {
        /// The holder with the invalid balance.
        holder_id: String,
        /// The offending amount.
        amount: Decimal,
    },

    /// Benefit unit cost was zero or negative.
    #[error("Invalid unit cost: {unit_cost} - cost must be positive")]
    InvalidUnitCost {
        /// The offending unit cost.
        unit_cost: Decimal,
    },

    /// Requested more units than the catalog has available (or zero).
    #[error("Insufficient inventory: requested {requested}, available {available}")]
    InsufficientInventory {
        /// Units requested.
        requested: u32,
        /// Units available in the catalog.
        available: u32,
    },
}
