//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Environment variables: `TREASURE_*` prefix
//!
//! No configuration files are read; `from_toml` / `to_toml` work on strings.

use std::collections::HashMap;

use config::{Config, ConfigError, Environment};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::GoldPrice;

/// Prefix of environment variables that override settings.
pub const ENV_PREFIX: &str = "TREASURE";

/// Unified configuration for treasure chests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Opening gold price in dollars per ounce (default: 1426.90)
    pub gold_price: GoldPrice,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gold_price: GoldPrice::DEFAULT,
        }
    }
}

impl Settings {
    /// Load settings from defaults and the process environment.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. `TREASURE_GOLD_PRICE`
    pub fn load() -> Result<Self, ApplicationError> {
        Self::apply_env_overrides(Self::default(), None)
    }

    /// Load settings from defaults and an explicit variable map.
    ///
    /// Same precedence as `load()`, but reads `vars` instead of the process
    /// environment. Keys are full variable names, e.g. `TREASURE_GOLD_PRICE`.
    pub fn load_from_env(vars: HashMap<String, String>) -> Result<Self, ApplicationError> {
        Self::apply_env_overrides(Self::default(), Some(vars))
    }

    /// Apply TREASURE_* environment variables as explicit overrides.
    fn apply_env_overrides(
        mut settings: Self,
        vars: Option<HashMap<String, String>>,
    ) -> Result<Self, ApplicationError> {
        let builder = Config::builder().add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .source(vars.map(|v| v.into_iter().collect())),
        );

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("gold_price") {
            debug!("apply_env_overrides: gold_price={}", val);
            let price: Decimal = val.trim().parse().map_err(|e| ApplicationError::Config {
                message: format!("{ENV_PREFIX}_GOLD_PRICE: invalid decimal '{val}': {e}"),
            })?;
            settings.gold_price = GoldPrice::new(price).map_err(|e| ApplicationError::Config {
                message: format!("{ENV_PREFIX}_GOLD_PRICE: {e}"),
            })?;
        }

        Ok(settings)
    }

    /// Opening price for a gold market. Already validated when loaded.
    pub fn initial_price(&self) -> GoldPrice {
        self.gold_price
    }

    /// Parse settings from TOML text. Missing keys fall back to defaults.
    ///
    /// A negative or overly precise `gold_price` is rejected while parsing.
    pub fn from_toml(content: &str) -> Result<Self, ApplicationError> {
        toml::from_str(content).map_err(|e| ApplicationError::Config {
            message: format!("parse config: {e}"),
        })
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config.
    pub fn template() -> String {
        r#"# treasure-chest configuration
#
# Sources (by precedence, lowest to highest):
#   Defaults: compiled in
#   Env:      TREASURE_* environment variables (explicit overrides)

# Opening gold price in dollars per ounce, written as a string to keep it exact
# gold_price = "1426.90"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
