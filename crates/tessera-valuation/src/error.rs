//! Error types for valuation operations.

use rust_decimal::Decimal;
use thiserror::Error;

use tessera_core::types::AssetKind;

/// A specialized Result type for valuation operations.
pub type ValuationResult<T> = Result<T, ValuationError>;

/// Errors raised by the deposit valuator and mint recommender.
///
/// Every variant is an input-shape error: surfaced immediately, never
/// retried, never silently defaulted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValuationError {
    /// Deposit quantity was zero or negative.
    #[error("Invalid quantity: {quantity} - quantity must be positive")]
    InvalidQuantity {
        /// The offending quantity.
        quantity: Decimal,
    },

    /// The deposited asset kind is not priced by the rate table.
    #[error("Asset kind {kind} is not priced by the rate table")]
    UnknownAssetKind {
        /// The unpriced asset kind.
        kind: AssetKind,
    },

    /// Appraised value was negative.
    #[error("Invalid value: {value} - appraised value must be non-negative")]
    InvalidValue {
        /// The offending value.
        value: Decimal,
    },

    /// Collateralization ratio outside (0, 1].
    #[error("Invalid collateral ratio: {ratio} - ratio must be in (0, 1]")]
    InvalidCollateralRatio {
        /// The offending ratio.
        ratio: Decimal,
    },

    /// Token conversion rate was zero or negative.
    #[error("Invalid conversion rate: {rate} - rate must be positive")]
    InvalidConversionRate {
        /// The offending rate.
        rate: Decimal,
    },
}
