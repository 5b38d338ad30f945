//! Core business logic abstractions

pub mod baseline;
pub mod cache;
pub mod config;
pub mod log;
pub mod price;
pub mod projection;

// Re-export main types for cleaner imports
pub use baseline::{Baseline, BaselineSource, fetch_baseline};
pub use price::{PriceProvider, PriceQuote};
pub use projection::{LeverageMultiple, PricePair, ProjectionError, ProjectionResult, Scenario, project};
