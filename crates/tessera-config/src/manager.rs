//! Configuration manager.
//!
//! Centralizes parameter profiles and rate configurations behind one
//! registry, with built-in standard profiles and TOML file loading.

use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;

use chrono::Utc;
use log::{debug, warn};
use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult, Validate};
use crate::params::BusinessParams;
use crate::rates::RateConfig;

/// The shape of a Tessera configuration file.
///
/// ```toml
/// [[params]]
/// name = "EU.PILOT"
/// token_conversion_rate = 50.0
/// collateral_ratio = 0.9
///
/// [[rates]]
/// name = "EU.PILOT"
///
/// [[rates.entries]]
/// kind = "gold"
/// unit_price = 55.0
/// ```
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    params: Vec<BusinessParams>,
    #[serde(default)]
    rates: Vec<RateConfig>,
}

/// Central configuration manager.
///
/// Holds parameter profiles and rate configurations in memory, with the
/// standard profiles registered at construction. Shared freely across
/// threads; the caches are behind `RwLock`s.
///
/// # Example
///
/// ```rust
/// use tessera_config::ConfigManager;
/// use rust_decimal_macros::dec;
///
/// let manager = ConfigManager::new();
///
/// let params = manager.get_params("PK.STANDARD").unwrap();
/// assert_eq!(params.collateral_ratio, dec!(0.8));
///
/// let table = manager.get_rates("PK.STANDARD").unwrap().build_table().unwrap();
/// assert!(!table.is_empty());
/// ```
pub struct ConfigManager {
    /// In-memory cache for parameter profiles.
    params_cache: RwLock<HashMap<String, BusinessParams>>,

    /// In-memory cache for rate configurations.
    rates_cache: RwLock<HashMap<String, RateConfig>>,
}

impl ConfigManager {
    /// Creates a manager with the standard configurations registered.
    #[must_use]
    pub fn new() -> Self {
        let manager = Self {
            params_cache: RwLock::new(HashMap::new()),
            rates_cache: RwLock::new(HashMap::new()),
        };
        manager.load_standard_configs();
        manager
    }

    /// Creates a manager with no built-in configurations.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            params_cache: RwLock::new(HashMap::new()),
            rates_cache: RwLock::new(HashMap::new()),
        }
    }

    /// Loads standard/built-in configurations.
    fn load_standard_configs(&self) {
        let _ = self.register_params(BusinessParams::pk_standard());
        let _ = self.register_params(BusinessParams::test_unit());
        let _ = self.register_rates(RateConfig::pk_standard());
    }

    /// Returns the parameter profile registered under `key`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no profile has that name.
    pub fn get_params(&self, key: &str) -> ConfigResult<BusinessParams> {
        let cache = self
            .params_cache
            .read()
            .map_err(|e| ConfigError::Conflict(format!("Lock error: {e}")))?;
        cache.get(key).cloned().ok_or_else(|| ConfigError::NotFound {
            key: key.to_string(),
        })
    }

    /// Registers a parameter profile, replacing any previous profile of the
    /// same name.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an invalid profile, or
    /// `ConfigError::ReadOnly` when attempting to replace a read-only one.
    pub fn register_params(&self, mut config: BusinessParams) -> ConfigResult<()> {
        config.validated()?;
        let mut cache = self
            .params_cache
            .write()
            .map_err(|e| ConfigError::Conflict(format!("Lock error: {e}")))?;
        if let Some(existing) = cache.get(&config.name) {
            if existing.read_only {
                return Err(ConfigError::ReadOnly {
                    key: config.name.clone(),
                });
            }
        }
        config.updated_at = Utc::now();
        debug!("registered params profile '{}'", config.name);
        cache.insert(config.name.clone(), config);
        Ok(())
    }

    /// Returns the rate configuration registered under `key`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no configuration has that name.
    pub fn get_rates(&self, key: &str) -> ConfigResult<RateConfig> {
        let cache = self
            .rates_cache
            .read()
            .map_err(|e| ConfigError::Conflict(format!("Lock error: {e}")))?;
        cache.get(key).cloned().ok_or_else(|| ConfigError::NotFound {
            key: key.to_string(),
        })
    }

    /// Registers a rate configuration, replacing any previous configuration
    /// of the same name.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an invalid configuration, or
    /// `ConfigError::ReadOnly` when attempting to replace a read-only one.
    pub fn register_rates(&self, config: RateConfig) -> ConfigResult<()> {
        config.validated()?;
        let mut cache = self
            .rates_cache
            .write()
            .map_err(|e| ConfigError::Conflict(format!("Lock error: {e}")))?;
        if let Some(existing) = cache.get(&config.name) {
            if existing.read_only {
                return Err(ConfigError::ReadOnly {
                    key: config.name.clone(),
                });
            }
        }
        debug!("registered rate config '{}'", config.name);
        cache.insert(config.name.clone(), config);
        Ok(())
    }

    /// Lists the registered parameter profile names, sorted.
    pub fn params_names(&self) -> ConfigResult<Vec<String>> {
        let cache = self
            .params_cache
            .read()
            .map_err(|e| ConfigError::Conflict(format!("Lock error: {e}")))?;
        let mut names: Vec<String> = cache.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    /// Loads configurations from a TOML string.
    ///
    /// Every profile in the file is registered; read-only collisions abort
    /// the load.
    pub fn load_toml_str(&self, content: &str) -> ConfigResult<()> {
        let file: ConfigFile = toml::from_str(content)?;
        if file.params.is_empty() && file.rates.is_empty() {
            warn!("configuration file contained no profiles");
        }
        for params in file.params {
            self.register_params(params)?;
        }
        for rates in file.rates {
            self.register_rates(rates)?;
        }
        Ok(())
    }

    /// Loads configurations from a TOML file on disk.
    pub fn load_path(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let content = std::fs::read_to_string(path)?;
        self.load_toml_str(&content)
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_standard_profiles_present() {
        let manager = ConfigManager::new();
        let params = manager.get_params("PK.STANDARD").unwrap();
        assert_eq!(params.token_conversion_rate, dec!(100));
        assert_eq!(params.ht_conversion_rate, dec!(10));

        let rates = manager.get_rates("PK.STANDARD").unwrap();
        let table = rates.build_table().unwrap();
        assert_eq!(
            table.unit_price(tessera_core::AssetKind::Gold),
            Some(dec!(15000))
        );
    }

    #[test]
    fn test_missing_profile() {
        let manager = ConfigManager::empty();
        assert!(matches!(
            manager.get_params("NOPE"),
            Err(ConfigError::NotFound { .. })
        ));
    }

    #[test]
    fn test_register_and_fetch() {
        let manager = ConfigManager::new();
        let custom = BusinessParams::new("MY.CUSTOM").with_collateral_ratio(dec!(0.5));
        manager.register_params(custom).unwrap();
        assert_eq!(
            manager.get_params("MY.CUSTOM").unwrap().collateral_ratio,
            dec!(0.5)
        );
        assert!(manager
            .params_names()
            .unwrap()
            .contains(&"MY.CUSTOM".to_string()));
    }

    #[test]
    fn test_read_only_profiles_cannot_be_replaced() {
        let manager = ConfigManager::new();
        let err = manager
            .register_params(BusinessParams::new("PK.STANDARD"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ReadOnly { .. }));
    }

    #[test]
    fn test_register_rejects_invalid_profile() {
        let manager = ConfigManager::new();
        let bad = BusinessParams::new("BAD").with_collateral_ratio(dec!(2));
        assert!(manager.register_params(bad).is_err());
    }

    #[test]
    fn test_load_toml() {
        let manager = ConfigManager::new();
        manager
            .load_toml_str(
                r#"
                [[params]]
                name = "EU.PILOT"
                token_conversion_rate = 50.0
                collateral_ratio = 0.9

                [[rates]]
                name = "EU.PILOT"

                [[rates.entries]]
                kind = "gold"
                unit_price = 55.0

                [[rates.entries]]
                kind = "silver"
                unit_price = 0.6
                "#,
            )
            .unwrap();

        let params = manager.get_params("EU.PILOT").unwrap();
        assert_eq!(params.token_conversion_rate, dec!(50));
        // omitted fields fall back to platform defaults
        assert_eq!(params.patient_share_pct, dec!(70));

        let table = manager.get_rates("EU.PILOT").unwrap().build_table().unwrap();
        assert_eq!(
            table.unit_price(tessera_core::AssetKind::Silver),
            Some(dec!(0.6))
        );
    }

    #[test]
    fn test_load_toml_rejects_garbage() {
        let manager = ConfigManager::new();
        assert!(matches!(
            manager.load_toml_str("not valid toml ["),
            Err(ConfigError::Parse(_))
        ));
    }
}
