//! Core domain types.
//!
//! Value objects shared by the valuation and allocation crates. All types
//! here are immutable snapshots; nothing owns or mutates anything else.

mod asset;
mod rate_table;

pub use asset::AssetKind;
pub use rate_table::{AssetRate, RateTable};
