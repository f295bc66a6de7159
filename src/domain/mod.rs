// Domain types shared across the app
pub mod candle;
pub mod interval;

pub use candle::{Candle, CandleType};
pub use interval::{HistoryPeriod, HtfResolution, Timeframe};
