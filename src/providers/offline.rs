use anyhow::{Result, anyhow};
use async_trait::async_trait;
use tracing::debug;

use crate::core::price::{PriceProvider, PriceQuote};

/// Price source for `--offline` runs; every ticker is unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineProvider;

#[async_trait]
impl PriceProvider for OfflineProvider {
    async fn fetch_latest_close(&self, symbol: &str) -> Result<PriceQuote> {
        debug!(symbol, "Offline mode, skipping fetch");
        Err(anyhow!("offline mode, no price fetched for {}", symbol))
    }
}
