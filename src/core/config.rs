use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

pub const DEFAULT_YAHOO_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// The reference asset and the leveraged fund that tracks it.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct PairConfig {
    pub reference: String,
    pub leveraged: String,
}

impl Default for PairConfig {
    fn default() -> Self {
        PairConfig {
            reference: "TSLA".to_string(),
            leveraged: "TSLL".to_string(),
        }
    }
}

/// Prices used when the price source cannot be reached.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct DefaultPrices {
    pub reference_price: f64,
    pub leveraged_price: f64,
}

impl Default for DefaultPrices {
    // Closing prices of 2025-10-17.
    fn default() -> Self {
        DefaultPrices {
            reference_price: 439.31,
            leveraged_price: 20.17,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct YahooProviderConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub cache_ttl_secs: u64,
}

impl Default for YahooProviderConfig {
    fn default() -> Self {
        YahooProviderConfig {
            base_url: DEFAULT_YAHOO_BASE_URL.to_string(),
            timeout_secs: 10,
            cache_ttl_secs: 300,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub yahoo: YahooProviderConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub pair: PairConfig,
    pub defaults: DefaultPrices,
    pub providers: ProvidersConfig,
    pub currency: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            pair: PairConfig::default(),
            defaults: DefaultPrices::default(),
            providers: ProvidersConfig::default(),
            currency: "USD".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads the config from the default location, or the built-in defaults
    /// when no file has been created there.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using built-in defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "levcalc", "levcalc")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.pair.reference.trim().is_empty() || self.pair.leveraged.trim().is_empty() {
            bail!("pair tickers must not be empty");
        }
        let defaults = &self.defaults;
        if !(defaults.reference_price.is_finite() && defaults.reference_price > 0.0)
            || !(defaults.leveraged_price.is_finite() && defaults.leveraged_price > 0.0)
        {
            bail!(
                "default prices must be positive, got {} and {}",
                defaults.reference_price,
                defaults.leveraged_price
            );
        }
        Ok(())
    }
}
