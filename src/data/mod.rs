// Market data acquisition
pub mod source;
pub mod yahoo;

// Re-export commonly used types
pub use source::{FetchRequest, InitialData, MarketDataSource, fetch_initial};
pub use yahoo::YahooChartSource;
