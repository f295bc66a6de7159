// Derived-series assembly and higher-timeframe bias
pub mod derived;
pub mod htf_bias;

pub use derived::{DerivedSeries, IndicatorParams, compute_derived};
pub use htf_bias::HtfBias;
