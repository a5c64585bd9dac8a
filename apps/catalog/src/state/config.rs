//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`RENTDRIVE_*`)
//! 2. Defaults (this file and `rentdrive_core::CatalogConfig`)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;

use rentdrive_core::{fleet, CatalogConfig, ClassPriority, CoreError, Inventory, PriceDomain};
use serde::Serialize;

/// Application configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Price domain and class priority handed to the core.
    pub catalog: CatalogConfig,

    /// JSON file of vehicle records. `None` uses the built-in fleet.
    pub inventory_path: Option<PathBuf>,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places shown on cards
    pub currency_decimals: u8,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Prices: $0 - $200, $10 steps
    /// - Priority: MPV, SUV, Sedan
    /// - Inventory: built-in fleet
    /// - Currency: "$" with no decimals ("$95 / day")
    fn default() -> Self {
        ConfigState {
            catalog: CatalogConfig::default(),
            inventory_path: None,
            currency_symbol: "$".to_string(),
            currency_decimals: 0,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `RENTDRIVE_PRICE_FLOOR`, `RENTDRIVE_PRICE_CEILING`,
    ///   `RENTDRIVE_PRICE_STEP`: price domain in whole units
    /// - `RENTDRIVE_CLASS_PRIORITY`: e.g. `"MPV,SUV,Sedan"`
    /// - `RENTDRIVE_INVENTORY_PATH`: JSON file of vehicle records
    /// - `RENTDRIVE_CURRENCY_SYMBOL`: display symbol
    pub fn from_env() -> Result<Self, ConfigError> {
        ConfigState::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] over an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();
        let defaults = config.catalog.price_domain;

        let floor = parse_units(&lookup, "RENTDRIVE_PRICE_FLOOR", defaults.floor().dollars())?;
        let ceiling = parse_units(&lookup, "RENTDRIVE_PRICE_CEILING", defaults.ceiling().dollars())?;
        let step = parse_units(&lookup, "RENTDRIVE_PRICE_STEP", defaults.step().dollars())?;
        config.catalog.price_domain = PriceDomain::from_units(floor, ceiling, step)
            .map_err(|e| ConfigError::InvalidValue(format!("price domain: {}", e)))?;

        if let Some(list) = lookup("RENTDRIVE_CLASS_PRIORITY") {
            config.catalog.class_priority = ClassPriority::parse_list(&list)
                .map_err(|e| ConfigError::InvalidValue(format!("RENTDRIVE_CLASS_PRIORITY: {}", e)))?;
        }

        config.inventory_path = lookup("RENTDRIVE_INVENTORY_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        if let Some(symbol) = lookup("RENTDRIVE_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        Ok(config)
    }

    /// Loads the inventory this configuration points at.
    ///
    /// Reads the JSON file when `inventory_path` is set, otherwise returns
    /// the built-in fleet.
    pub fn load_inventory(&self) -> Result<Inventory, ConfigError> {
        match &self.inventory_path {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|source| {
                    ConfigError::InventoryUnreadable {
                        path: path.clone(),
                        source,
                    }
                })?;
                Ok(Inventory::from_json_str(&json)?)
            }
            None => Ok(fleet::default_inventory()?),
        }
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use rentdrive_catalog::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(9500), "$95");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let sign = if cents < 0 { "-" } else { "" };
        let whole = (cents / 100).abs();

        if self.currency_decimals == 0 {
            return format!("{}{}{}", sign, self.currency_symbol, whole);
        }

        let decimals = self.currency_decimals.min(2) as usize;
        let frac = (cents % 100).abs() / 10_i64.pow(2 - decimals as u32);
        format!(
            "{}{}{}.{:0width$}",
            sign,
            self.currency_symbol,
            whole,
            frac,
            width = decimals
        )
    }
}

fn parse_units<F>(lookup: &F, key: &str, default: i64) -> Result<i64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Cannot read inventory file {path:?}: {source}")]
    InventoryUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Inventory rejected: {0}")]
    Inventory(#[from] CoreError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentdrive_core::{Money, VehicleClass};
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = ConfigState::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.catalog, CatalogConfig::default());
        assert!(config.inventory_path.is_none());
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigState::from_lookup(lookup(&[
            ("RENTDRIVE_PRICE_CEILING", "300"),
            ("RENTDRIVE_PRICE_STEP", "25"),
            ("RENTDRIVE_CLASS_PRIORITY", "SUV,MPV,Sedan"),
            ("RENTDRIVE_INVENTORY_PATH", "/srv/rentdrive/cars.json"),
            ("RENTDRIVE_CURRENCY_SYMBOL", "€"),
        ]))
        .unwrap();

        assert_eq!(config.catalog.price_domain.ceiling(), Money::from_major(300));
        assert_eq!(config.catalog.price_domain.step(), Money::from_major(25));
        assert_eq!(config.catalog.class_priority.rank(VehicleClass::Suv), Some(0));
        assert_eq!(
            config.inventory_path,
            Some(PathBuf::from("/srv/rentdrive/cars.json"))
        );
        assert_eq!(config.format_currency(9500), "€95");
    }

    #[test]
    fn test_invalid_values_fail() {
        let err = ConfigState::from_lookup(lookup(&[("RENTDRIVE_PRICE_CEILING", "lots")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref key) if key == "RENTDRIVE_PRICE_CEILING"));

        assert!(ConfigState::from_lookup(lookup(&[("RENTDRIVE_PRICE_FLOOR", "500")])).is_err());
        assert!(ConfigState::from_lookup(lookup(&[("RENTDRIVE_CLASS_PRIORITY", "MPV,Van")])).is_err());
    }

    #[test]
    fn test_oversized_price_domain_fails() {
        let err = ConfigState::from_lookup(lookup(&[(
            "RENTDRIVE_PRICE_CEILING",
            "100000000000000000",
        )]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref msg) if msg.starts_with("price domain")));

        // fits in cents; stepping past the ceiling must not overflow
        let config = ConfigState::from_lookup(lookup(&[
            ("RENTDRIVE_PRICE_CEILING", "90000000000000000"),
            ("RENTDRIVE_PRICE_STEP", "50000000000000000"),
        ]))
        .unwrap();
        let domain = config.catalog.price_domain;
        assert_eq!(domain.ticks().last(), Some(&domain.ceiling()));

        let err = ConfigState::from_lookup(lookup(&[
            ("RENTDRIVE_PRICE_CEILING", "1000000000000"),
            ("RENTDRIVE_PRICE_STEP", "1"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn test_load_default_inventory() {
        let inventory = ConfigState::default().load_inventory().unwrap();
        assert_eq!(inventory.len(), 9);
    }

    #[test]
    fn test_missing_inventory_file() {
        let config = ConfigState {
            inventory_path: Some(PathBuf::from("/nonexistent/rentdrive/cars.json")),
            ..ConfigState::default()
        };
        assert!(matches!(
            config.load_inventory().unwrap_err(),
            ConfigError::InventoryUnreadable { .. }
        ));
    }

    #[test]
    fn test_format_currency() {
        let mut config = ConfigState::default();
        assert_eq!(config.format_currency(15000), "$150");
        assert_eq!(config.format_currency(0), "$0");
        assert_eq!(config.format_currency(-550), "-$5");

        config.currency_decimals = 2;
        assert_eq!(config.format_currency(9550), "$95.50");
        assert_eq!(config.format_currency(-550), "-$5.50");
    }
}
