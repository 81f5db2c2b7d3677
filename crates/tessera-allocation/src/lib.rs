//! # Tessera Allocation
//!
//! Pro-rata profit allocation and redemption validation for the Tessera
//! asset tokenization library.
//!
//! Two standalone operations live here:
//!
//! - [`allocate`](engine::allocate): splits a trading-profit pool between a
//!   patient share and an operator share, then distributes the patient
//!   share across holders in proportion to their asset-token holdings,
//!   denominated in health tokens
//! - [`validate_redemption`](redemption::validate_redemption): computes the
//!   cost of redeeming a benefit against a health-token balance and whether
//!   the redemption may proceed
//!
//! Both are pure functions: inputs are snapshots, outputs are new values,
//! nothing is mutated. The transactional boundary (debiting balances,
//! decrementing inventory) belongs to the caller.
//!
//! ## Example
//!
//! ```rust
//! use tessera_allocation::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let pool = ProfitPool::new(dec!(50000), dec!(70));
//! let holders = vec![
//!     HolderBalance::new("PAT-001", dec!(5000)),
//!     HolderBalance::new("PAT-002", dec!(3200)),
//! ];
//!
//! let report = allocate(&pool, &holders, dec!(10))?;
//! assert_eq!(report.patient_share, dec!(35000));
//! assert_eq!(report.operator_share, dec!(15000));
//! assert_eq!(report.allocations.len(), 2);
//! # Ok::<(), tessera_allocation::AllocationError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::manual_range_contains)]

pub mod catalog;
pub mod engine;
pub mod error;
pub mod redemption;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::catalog::{eligible, standard_catalog, BenefitCatalogEntry};
    pub use crate::engine::allocate;
    pub use crate::error::{AllocationError, AllocationResult};
    pub use crate::redemption::{validate_redemption, RedemptionQuote};
    pub use crate::types::{AllocationReport, HolderAllocation, HolderBalance, ProfitPool};
}

pub use catalog::{standard_catalog, BenefitCatalogEntry};
pub use engine::allocate;
pub use error::{AllocationError, AllocationResult};
pub use redemption::{validate_redemption, RedemptionQuote};
pub use types::{AllocationReport, HolderAllocation, HolderBalance, ProfitPool};
