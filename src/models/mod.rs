pub mod timeseries;

pub use timeseries::OhlcvTimeSeries;
