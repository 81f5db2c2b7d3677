//! Error types shared across the Tessera workspace.
//!
//! This module defines the core error type used by the shared domain types,
//! providing structured error handling with context.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::AssetKind;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by the shared domain types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// An asset rate was constructed with a non-positive unit price.
    #[error("Invalid rate for {kind}: unit price {unit_price} must be positive")]
    InvalidRate {
        /// Asset kind carrying the invalid rate.
        kind: AssetKind,
        /// The offending unit price.
        unit_price: Decimal,
    },

    /// The same asset kind appeared twice while building a rate table.
    #[error("Duplicate rate for asset kind {kind}")]
    DuplicateRate {
        /// The duplicated asset kind.
        kind: AssetKind,
    },

    /// A string could not be parsed into an asset kind.
    #[error("Unknown asset kind: {kind}")]
    UnknownAssetKind {
        /// The unrecognized input.
        kind: String,
    },
}
