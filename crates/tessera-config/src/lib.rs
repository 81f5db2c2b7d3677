//! Tessera Configuration Layer
//!
//! This crate provides configuration management for the Tessera asset
//! tokenization library. It holds the business constants the calculators
//! take as parameters - token conversion rates, the mint collateralization
//! ratio, the default patient profit share - and the asset rate tables,
//! so deployments adjust them in configuration rather than by recompiling.
//!
//! # Features
//!
//! - **Parameter Profiles**: Named [`BusinessParams`] profiles with
//!   validated fields and platform defaults
//! - **Rate Configuration**: [`RateConfig`] entries that build the
//!   immutable `RateTable` the valuator consumes
//! - **Standard Profiles**: `PK.STANDARD` (production PKR constants) and
//!   `TEST.UNIT` (unit denominations for tests) loaded by default
//! - **File Loading**: TOML configuration files merged over the built-ins
//!
//! # Example
//!
//! ```rust
//! use tessera_config::{BusinessParams, ConfigManager};
//! use rust_decimal_macros::dec;
//!
//! let manager = ConfigManager::new();
//!
//! // Built-in standard profile
//! let params = manager.get_params("PK.STANDARD").unwrap();
//! assert_eq!(params.collateral_ratio, dec!(0.8));
//!
//! // Register a custom profile
//! let custom = BusinessParams::new("MY.CUSTOM")
//!     .with_patient_share_pct(dec!(60))
//!     .with_description("Pilot deployment split");
//! manager.register_params(custom).unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod manager;
mod params;
mod rates;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use manager::ConfigManager;
pub use params::BusinessParams;
pub use rates::{RateConfig, RateEntry};
