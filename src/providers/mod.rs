pub mod offline;
pub mod yahoo_finance;

pub use offline::OfflineProvider;
pub use yahoo_finance::YahooFinanceProvider;
