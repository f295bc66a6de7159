use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::domain::candle::Candle;

// ============================================================================
// OhlcvTimeSeries: Raw time series data for one chart symbol
// ============================================================================

/// Column-oriented bar storage: the four price columns and the timestamp
/// column are always the same length, and timestamps are strictly increasing
/// (one bar per period). `from_columns` is the only constructor so the
/// invariants hold for every instance.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OhlcvTimeSeries {
    pub symbol: String,
    pub interval_code: String,
    pub timestamps_ms: Vec<i64>,

    // Prices
    pub open_prices: Vec<f64>,
    pub high_prices: Vec<f64>,
    pub low_prices: Vec<f64>,
    pub close_prices: Vec<f64>,
}

impl OhlcvTimeSeries {
    pub fn from_columns(
        symbol: String,
        interval_code: String,
        timestamps_ms: Vec<i64>,
        open_prices: Vec<f64>,
        high_prices: Vec<f64>,
        low_prices: Vec<f64>,
        close_prices: Vec<f64>,
    ) -> Result<Self> {
        let bars = timestamps_ms.len();
        if open_prices.len() != bars
            || high_prices.len() != bars
            || low_prices.len() != bars
            || close_prices.len() != bars
        {
            bail!(
                "misaligned OHLC columns for {}: {} timestamps vs {}/{}/{}/{} prices",
                symbol,
                bars,
                open_prices.len(),
                high_prices.len(),
                low_prices.len(),
                close_prices.len(),
            );
        }

        for pair in timestamps_ms.windows(2) {
            if pair[1] <= pair[0] {
                bail!(
                    "timestamps for {} are not strictly increasing ({} then {})",
                    symbol,
                    pair[0],
                    pair[1],
                );
            }
        }

        Ok(OhlcvTimeSeries {
            symbol,
            interval_code,
            timestamps_ms,
            open_prices,
            high_prices,
            low_prices,
            close_prices,
        })
    }

    pub fn get_candle(&self, idx: usize) -> Candle {
        Candle::new(
            self.open_prices[idx],
            self.high_prices[idx],
            self.low_prices[idx],
            self.close_prices[idx],
        )
    }

    pub fn bars(&self) -> usize {
        self.open_prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open_prices.is_empty()
    }

    pub fn last_timestamp_ms(&self) -> Option<i64> {
        self.timestamps_ms.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(n: usize) -> (Vec<i64>, Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
        let ts: Vec<i64> = (0..n as i64).map(|i| i * 86_400_000).collect();
        let base: Vec<f64> = (0..n).map(|i| 100.0 + i as f64).collect();
        (
            ts,
            base.clone(),
            base.iter().map(|p| p + 1.0).collect(),
            base.iter().map(|p| p - 1.0).collect(),
            base,
        )
    }

    #[test]
    fn from_columns_accepts_aligned_increasing_data() {
        let (ts, o, h, l, c) = columns(5);
        let series =
            OhlcvTimeSeries::from_columns("TEST".into(), "1d".into(), ts, o, h, l, c).unwrap();
        assert_eq!(series.bars(), 5);
        assert_eq!(series.last_timestamp_ms(), Some(4 * 86_400_000));
    }

    #[test]
    fn from_columns_rejects_misaligned_columns() {
        let (ts, o, h, l, mut c) = columns(5);
        c.pop();
        let result = OhlcvTimeSeries::from_columns("TEST".into(), "1d".into(), ts, o, h, l, c);
        assert!(result.is_err(), "short close column must be rejected");
    }

    #[test]
    fn from_columns_rejects_non_increasing_timestamps() {
        let (mut ts, o, h, l, c) = columns(5);
        ts[3] = ts[2]; // duplicate bar
        let result = OhlcvTimeSeries::from_columns("TEST".into(), "1d".into(), ts, o, h, l, c);
        assert!(result.is_err(), "duplicate timestamps must be rejected");
    }

    #[test]
    fn get_candle_reads_one_row_across_columns() {
        let (ts, o, h, l, c) = columns(3);
        let series =
            OhlcvTimeSeries::from_columns("TEST".into(), "1d".into(), ts, o, h, l, c).unwrap();
        let candle = series.get_candle(1);
        assert_eq!(candle.open_price, 101.0);
        assert_eq!(candle.high_price, 102.0);
        assert_eq!(candle.low_price, 100.0);
        assert_eq!(candle.close_price, 101.0);
    }
}
