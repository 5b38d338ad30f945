//! Price source abstractions and core types

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Most recent daily close for a ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub symbol: String,
    pub price: f64,
    pub currency: String,
    pub short_name: Option<String>,
}

/// A source of closing prices. An `Err` means no usable price could be
/// retrieved for the ticker; callers decide how to recover.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    async fn fetch_latest_close(&self, symbol: &str) -> Result<PriceQuote>;

    /// Forgets any cached quotes so the next fetch reaches the source.
    async fn invalidate(&self) {}
}
