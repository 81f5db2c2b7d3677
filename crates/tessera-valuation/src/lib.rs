//! # Tessera Valuation
//!
//! Deposit valuation and mint recommendation for the Tessera asset
//! tokenization library.
//!
//! Two standalone calculations live here:
//!
//! - [`valuate`](deposit::valuate): converts a submitted asset deposit
//!   (kind, quantity) into monetary worth and an estimated asset-token count
//! - [`recommend_mint`](mint::recommend_mint): converts an approved
//!   deposit's appraised value into a recommended mint amount under a
//!   collateralization ratio
//!
//! Both are pure functions over explicit inputs: no I/O, no caching, no
//! shared state. Business constants (the token conversion rate, the
//! collateralization ratio) are parameters supplied by the caller, normally
//! from a `tessera-config` profile.
//!
//! ## Example
//!
//! ```rust
//! use tessera_core::prelude::*;
//! use tessera_valuation::prelude::*;
//! use chrono::Utc;
//! use rust_decimal_macros::dec;
//!
//! let rates = RateTable::from_rates(
//!     vec![AssetRate::new(AssetKind::Gold, dec!(15000))],
//!     Utc::now(),
//! )?;
//!
//! // 10 grams of gold at 15000 per gram, 100 monetary units per token
//! let valuation = valuate(AssetKind::Gold, dec!(10), &rates, dec!(100))?;
//! assert_eq!(valuation.worth, dec!(150000));
//! assert_eq!(valuation.estimated_tokens, dec!(1500));
//!
//! // Recommend minting against 80% of appraised value
//! let recommended = recommend_mint(dec!(625000), dec!(0.8))?;
//! assert_eq!(recommended, dec!(500000));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::manual_range_contains)]

pub mod deposit;
pub mod error;
pub mod mint;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::deposit::{valuate, DepositValuation};
    pub use crate::error::{ValuationError, ValuationResult};
    pub use crate::mint::recommend_mint;
}

pub use deposit::{valuate, DepositValuation};
pub use error::{ValuationError, ValuationResult};
pub use mint::recommend_mint;
