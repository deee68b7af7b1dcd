//! # Configuration Loading
//!
//! Builds the [`PricingConfig`] the checkout runs with.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CHECKOUT_DEFAULT_CURRENCY=EUR                                      │
//! │     CHECKOUT_TAX_RATE_BPS=2000                                         │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config / CHECKOUT_CONFIG, else                                   │
//! │     ~/.config/checkout-pricing/checkout.toml (Linux)                   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     PricingConfig::default()                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # checkout.toml
//! default_currency = "USD"
//! tax_rate_bps = 2100
//! save20_threshold = 200
//! vip_discount = 50
//! ```

use std::path::{Path, PathBuf};

use checkout_core::{CheckoutError, PricingConfig};
use tracing::{debug, info};

pub const ENV_DEFAULT_CURRENCY: &str = "CHECKOUT_DEFAULT_CURRENCY";
pub const ENV_TAX_RATE_BPS: &str = "CHECKOUT_TAX_RATE_BPS";

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error(transparent)]
    Invalid(#[from] CheckoutError),
}

/// Loads configuration from file, environment, and defaults.
///
/// ## Load Order (later overrides earlier)
/// 1. Default values
/// 2. Config file (an explicit path must exist; the default path may not)
/// 3. Environment variables
pub fn load(config_path: Option<PathBuf>) -> Result<PricingConfig, ConfigError> {
    let mut config = match config_path {
        Some(path) => read_file(&path)?,
        None => match default_config_path().filter(|path| path.exists()) {
            Some(path) => read_file(&path)?,
            None => {
                debug!("No config file found, using defaults");
                PricingConfig::default()
            }
        },
    };

    apply_overrides(&mut config, |key| std::env::var(key).ok())?;
    config.validate()?;

    Ok(config)
}

/// Parses a TOML config file. Missing keys keep their defaults.
pub fn read_file(path: &Path) -> Result<PricingConfig, ConfigError> {
    info!(?path, "Loading pricing config from file");
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Applies overrides from a variable lookup (the process environment in
/// production).
pub fn apply_overrides<F>(config: &mut PricingConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(currency) = lookup(ENV_DEFAULT_CURRENCY) {
        debug!(currency = %currency, "Overriding default currency from environment");
        config.default_currency = currency;
    }

    if let Some(raw) = lookup(ENV_TAX_RATE_BPS) {
        config.tax_rate_bps = raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(ENV_TAX_RATE_BPS.to_string()))?;
        debug!(bps = config.tax_rate_bps, "Overriding tax rate from environment");
    }

    Ok(())
}

/// Returns the default config file path.
fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "checkout", "pricing")
        .map(|dirs| dirs.config_dir().join("checkout.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_overrides_apply() {
        let mut config = PricingConfig::default();
        apply_overrides(
            &mut config,
            lookup(&[(ENV_DEFAULT_CURRENCY, "EUR"), (ENV_TAX_RATE_BPS, "2000")]),
        )
        .unwrap();

        assert_eq!(config.default_currency, "EUR");
        assert_eq!(config.tax_rate_bps, 2000);
    }

    #[test]
    fn test_no_overrides_keeps_defaults() {
        let mut config = PricingConfig::default();
        apply_overrides(&mut config, lookup(&[])).unwrap();
        assert_eq!(config, PricingConfig::default());
    }

    #[test]
    fn test_bad_tax_rate_override() {
        let mut config = PricingConfig::default();
        let err = apply_overrides(&mut config, lookup(&[(ENV_TAX_RATE_BPS, "21%")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn test_read_partial_toml_file() {
        let path = std::env::temp_dir()
            .join(format!("checkout-config-{}.toml", std::process::id()));
        std::fs::write(&path, "default_currency = \"GBP\"\nvip_discount = 75\n").unwrap();

        let config = read_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.default_currency, "GBP");
        assert_eq!(config.vip_discount, 75);
        assert_eq!(config.tax_rate_bps, 2100);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = read_file(Path::new("/definitely/not/here/checkout.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&PricingConfig::default()).unwrap();
        assert!(toml_str.contains("tax_rate_bps = 2100"));
        assert!(toml_str.contains("default_currency = \"USD\""));
    }
}
