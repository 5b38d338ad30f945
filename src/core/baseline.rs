//! One-time baseline snapshot taken at the start of a session.

use crate::core::config::AppConfig;
use crate::core::price::{PriceProvider, PriceQuote};
use crate::core::projection::PricePair;
use anyhow::{Context, Result, bail};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum BaselineSource {
    /// Both prices came from the price source.
    Live,
    /// The configured defaults were used; `reason` says which fetch failed.
    Fallback { reason: String },
}

/// Immutable starting point for every projection in a session.
#[derive(Debug, Clone, PartialEq)]
pub struct Baseline {
    pub reference_symbol: String,
    pub leveraged_symbol: String,
    pub reference_name: Option<String>,
    pub leveraged_name: Option<String>,
    pub currency: String,
    pub prices: PricePair,
    pub source: BaselineSource,
}

impl Baseline {
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, BaselineSource::Fallback { .. })
    }

    fn live(reference: PriceQuote, leveraged: PriceQuote) -> Result<Self> {
        // Both ratios are compared in one currency, so the legs must agree.
        if !reference.currency.eq_ignore_ascii_case(&leveraged.currency) {
            bail!(
                "currency mismatch: {} is quoted in {}, {} in {}",
                reference.symbol,
                reference.currency,
                leveraged.symbol,
                leveraged.currency
            );
        }
        let prices = PricePair::new(reference.price, leveraged.price)?;
        Ok(Baseline {
            reference_symbol: reference.symbol,
            leveraged_symbol: leveraged.symbol,
            reference_name: reference.short_name,
            leveraged_name: leveraged.short_name,
            currency: reference.currency,
            prices,
            source: BaselineSource::Live,
        })
    }

    fn fallback(config: &AppConfig, reason: String) -> Result<Self> {
        let prices = PricePair::new(
            config.defaults.reference_price,
            config.defaults.leveraged_price,
        )
        .context("Configured default prices are invalid")?;
        Ok(Baseline {
            reference_symbol: config.pair.reference.clone(),
            leveraged_symbol: config.pair.leveraged.clone(),
            reference_name: None,
            leveraged_name: None,
            currency: config.currency.clone(),
            prices,
            source: BaselineSource::Fallback { reason },
        })
    }
}

/// Fetches the latest close for both tickers and builds the session baseline.
///
/// If either ticker is unavailable both prices fall back to the configured
/// defaults, so a baseline never mixes live and default prices. Only invalid
/// configured defaults make this fail.
pub async fn fetch_baseline(
    provider: &(dyn PriceProvider + Send + Sync),
    config: &AppConfig,
) -> Result<Baseline> {
    let reference_symbol = config.pair.reference.as_str();
    let leveraged_symbol = config.pair.leveraged.as_str();
    debug!(reference_symbol, leveraged_symbol, "Fetching baseline prices");

    let (reference, leveraged) = futures::join!(
        provider.fetch_latest_close(reference_symbol),
        provider.fetch_latest_close(leveraged_symbol)
    );

    let failure = match (reference, leveraged) {
        (Ok(reference), Ok(leveraged)) => {
            match Baseline::live(reference, leveraged) {
                Ok(baseline) => {
                    info!(
                        reference = baseline.prices.reference_price(),
                        leveraged = baseline.prices.leveraged_price(),
                        "Using live baseline"
                    );
                    return Ok(baseline);
                }
                Err(e) => e.to_string(),
            }
        }
        (Err(e), Ok(_)) => format!("{reference_symbol}: {e}"),
        (Ok(_), Err(e)) => format!("{leveraged_symbol}: {e}"),
        (Err(e1), Err(e2)) => format!("{reference_symbol}: {e1}; {leveraged_symbol}: {e2}"),
    };

    warn!(reason = %failure, "Price data unavailable, falling back to defaults");
    Baseline::fallback(config, failure)
}
