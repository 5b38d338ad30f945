use anyhow::{Result, anyhow, bail};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::core::cache::Cache;
use crate::core::price::{PriceProvider, PriceQuote};

/// A few sessions of daily bars, so a weekend or holiday still yields a close.
const CHART_QUERY: &str = "interval=1d&range=5d";

// YahooFinanceProvider implementation for PriceProvider
pub struct YahooFinanceProvider {
    base_url: String,
    timeout: Duration,
    cache: Arc<Cache<String, PriceQuote>>,
}

impl YahooFinanceProvider {
    pub fn new(base_url: &str, cache: Arc<Cache<String, PriceQuote>>) -> Self {
        YahooFinanceProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(10),
            cache,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Deserialize, Debug)]
struct YahooChartResponse {
    chart: ChartResult,
}

#[derive(Deserialize, Debug)]
struct ChartResult {
    result: Option<Vec<ChartItem>>,
    error: Option<ChartError>,
}

#[derive(Deserialize, Debug)]
struct ChartError {
    description: Option<String>,
}

#[derive(Deserialize, Debug)]
struct Indicators {
    quote: Vec<Quote>,
}

#[derive(Deserialize, Debug)]
struct Quote {
    close: Option<Vec<Option<f64>>>,
}

#[derive(Deserialize, Debug)]
struct ChartItem {
    meta: ChartMeta,
    indicators: Option<Indicators>,
}

#[derive(Deserialize, Debug)]
struct ChartMeta {
    #[serde(alias = "regularMarketPrice")]
    regular_market_price: Option<f64>,
    currency: Option<String>,
    #[serde(alias = "shortName")]
    short_name: Option<String>,
}

/// Last non-null daily close, or the regular market price when the chart has no bars.
fn latest_close(item: &ChartItem) -> Option<f64> {
    item.indicators
        .as_ref()
        .and_then(|inds| inds.quote.first())
        .and_then(|q| q.close.as_ref())
        .and_then(|closes| closes.iter().rev().find_map(|c| *c))
        .or(item.meta.regular_market_price)
}

#[async_trait]
impl PriceProvider for YahooFinanceProvider {
    #[instrument(
        name = "YahooLatestClose",
        skip(self),
        fields(symbol = %symbol)
    )]
    async fn fetch_latest_close(&self, symbol: &str) -> Result<PriceQuote> {
        let symbol = symbol.trim().to_uppercase();
        if symbol.is_empty() {
            bail!("Ticker symbol must not be empty");
        }

        if let Some(cached) = self.cache.get(&symbol).await {
            return Ok(cached);
        }

        let url = format!("{}/v8/finance/chart/{}?{}", self.base_url, symbol, CHART_QUERY);
        debug!("Requesting price data from {}", url);

        let client = reqwest::Client::builder()
            .user_agent("levcalc/1.0")
            .timeout(self.timeout)
            .build()?;
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for symbol: {} URL: {}", e, symbol, url))?;

        debug!(response = ?response, "Received Yahoo response");

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for symbol: {}",
                response.status(),
                symbol
            ));
        }

        let text = response.text().await?;
        let data: YahooChartResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse JSON response for {}: {}", symbol, e))?;

        if let Some(description) = data.chart.error.and_then(|e| e.description) {
            return Err(anyhow!("Yahoo error for symbol {}: {}", symbol, description));
        }

        let item = data
            .chart
            .result
            .and_then(|items| items.into_iter().next())
            .ok_or_else(|| anyhow!("No price data found for symbol: {}", symbol))?;

        let price = latest_close(&item)
            .ok_or_else(|| anyhow!("No closing price found for symbol: {}", symbol))?;
        if !price.is_finite() || price <= 0.0 {
            return Err(anyhow!("Invalid price {} for symbol: {}", price, symbol));
        }

        let quote = PriceQuote {
            symbol: symbol.clone(),
            price,
            currency: item.meta.currency.unwrap_or_else(|| "USD".to_string()),
            short_name: item.meta.short_name,
        };

        self.cache.put(symbol, quote.clone()).await;

        Ok(quote)
    }

    async fn invalidate(&self) {
        debug!("Dropping cached Yahoo quotes");
        self.cache.clear().await;
    }
}
