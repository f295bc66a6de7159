//! Higher-timeframe bias: one MACD pass over an independently fetched,
//! coarser-resolution series for the same symbol.

use crate::analysis::derived::IndicatorParams;
use crate::indicators::macd::MacdSeries;
use crate::models::OhlcvTimeSeries;

/// Trading bias derived from the latest HTF MACD value.
#[derive(Debug, Clone, PartialEq)]
pub enum HtfBias {
    Bullish,
    Bearish,
    /// HTF fetch or computation failed; holds the user-facing reason. The
    /// primary chart is never affected by this state.
    Unavailable(String),
}

impl HtfBias {
    pub fn label(&self) -> String {
        match self {
            HtfBias::Bullish => "BULLISH (Only Buy)".to_string(),
            HtfBias::Bearish => "BEARISH (Only Sell)".to_string(),
            HtfBias::Unavailable(reason) => format!("Error: {reason}"),
        }
    }

    pub fn guidance(&self) -> Option<&'static str> {
        match self {
            HtfBias::Bullish => Some("HTF bias is BULLISH: focus on long setups."),
            HtfBias::Bearish => Some("HTF bias is BEARISH: focus on short setups."),
            HtfBias::Unavailable(_) => None,
        }
    }
}

/// Classify the bias using the same MACD parameters as the primary chart.
///
/// Strictly-greater-than-zero is required for Bullish; a latest MACD of
/// exactly 0 resolves to Bearish.
pub fn classify(series: &OhlcvTimeSeries, params: &IndicatorParams) -> HtfBias {
    let macd = MacdSeries::compute(
        &series.close_prices,
        params.fast_len,
        params.slow_len,
        params.signal_len,
    );

    match macd.latest_macd() {
        Some(value) if value > 0.0 => HtfBias::Bullish,
        Some(_) => HtfBias::Bearish,
        None => HtfBias::Unavailable("no bars in HTF series".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series_from_closes(closes: Vec<f64>) -> OhlcvTimeSeries {
        let ts: Vec<i64> = (0..closes.len() as i64).map(|i| i * 604_800_000).collect();
        let open = closes.clone();
        let high: Vec<f64> = closes.iter().map(|c| c + 1.0).collect();
        let low: Vec<f64> = closes.iter().map(|c| c - 1.0).collect();
        OhlcvTimeSeries::from_columns("TEST".into(), "1wk".into(), ts, open, high, low, closes)
            .unwrap()
    }

    #[test]
    fn rising_series_is_bullish() {
        let series = series_from_closes((1..=60).map(|i| i as f64).collect());
        assert_eq!(
            classify(&series, &IndicatorParams::default()),
            HtfBias::Bullish
        );
    }

    #[test]
    fn falling_series_is_bearish() {
        let series = series_from_closes((1..=60).rev().map(|i| i as f64).collect());
        assert_eq!(
            classify(&series, &IndicatorParams::default()),
            HtfBias::Bearish
        );
    }

    #[test]
    fn latest_macd_of_exactly_zero_is_bearish() {
        // A constant series keeps the seeded MACD at exactly 0 on every bar;
        // Bullish requires strictly greater than zero.
        let series = series_from_closes(vec![100.0; 60]);
        assert_eq!(
            classify(&series, &IndicatorParams::default()),
            HtfBias::Bearish
        );
    }

    #[test]
    fn bias_labels_match_the_dashboard_wording() {
        assert_eq!(HtfBias::Bullish.label(), "BULLISH (Only Buy)");
        assert_eq!(HtfBias::Bearish.label(), "BEARISH (Only Sell)");
        assert!(HtfBias::Unavailable("boom".into()).label().contains("boom"));
        assert!(HtfBias::Unavailable("boom".into()).guidance().is_none());
    }
}
