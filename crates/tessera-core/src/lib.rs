//! # Tessera Core
//!
//! Core types for the Tessera asset tokenization library.
//!
//! This crate provides the foundational building blocks used throughout
//! Tessera:
//!
//! - **Types**: Domain-specific types like `AssetKind`, `AssetRate`, `RateTable`
//! - **Rounding**: The single rounding policy applied to monetary results
//! - **Errors**: Structured error types shared across the workspace
//!
//! ## Design Philosophy
//!
//! - **Decimal Everywhere**: All domain arithmetic uses `rust_decimal`;
//!   binary floating point never enters a calculation
//! - **Value Objects**: Inputs are plain, immutable values; no entity owns
//!   another and no module-level mutable state exists
//! - **Explicit Over Implicit**: Rounding happens once, at the result
//!   boundary, through a named function
//!
//! ## Example
//!
//! ```rust
//! use tessera_core::prelude::*;
//! use chrono::Utc;
//! use rust_decimal_macros::dec;
//!
//! let table = RateTable::from_rates(
//!     vec![AssetRate::new(AssetKind::Gold, dec!(15000))],
//!     Utc::now(),
//! )?;
//! assert_eq!(table.unit_price(AssetKind::Gold), Some(dec!(15000)));
//! # Ok::<(), tessera_core::CoreError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::manual_range_contains)]

pub mod error;
pub mod rounding;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::rounding::{floor_tokens, round_money, rounding_tolerance, MONEY_DP};
    pub use crate::types::{AssetKind, AssetRate, RateTable};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{AssetKind, AssetRate, RateTable};
