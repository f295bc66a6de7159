use serde::{Deserialize, Serialize};

use crate::config::INDICATOR;
use crate::indicators::divergence::{self, DivergenceMarkers, PivotLookback};
use crate::indicators::macd::MacdSeries;
use crate::indicators::momentum::{self, MomentumTag};
use crate::indicators::zone::{self, Zone};
use crate::models::OhlcvTimeSeries;

/// Parameters for one full indicator pass
///
/// This struct represents everything the engine needs beyond the bar series.
/// It implements PartialEq to enable efficient change detection in the UI.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IndicatorParams {
    pub fast_len: u32,
    pub slow_len: u32,
    pub signal_len: u32,
    pub chop_threshold: f64,
    pub detect_divergence: bool,
    pub pivot_left: usize,
    pub pivot_right: usize,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        IndicatorParams {
            fast_len: INDICATOR.macd.fast_len,
            slow_len: INDICATOR.macd.slow_len,
            signal_len: INDICATOR.macd.signal_len,
            chop_threshold: INDICATOR.chop.default_threshold,
            detect_divergence: true,
            pivot_left: INDICATOR.pivot.default_left,
            pivot_right: INDICATOR.pivot.default_right,
        }
    }
}

// Manual PartialEq implementation to handle f64 comparison
impl PartialEq for IndicatorParams {
    fn eq(&self, other: &Self) -> bool {
        self.fast_len == other.fast_len
            && self.slow_len == other.slow_len
            && self.signal_len == other.signal_len
            && self.chop_threshold.to_bits() == other.chop_threshold.to_bits()
            && self.detect_divergence == other.detect_divergence
            && self.pivot_left == other.pivot_left
            && self.pivot_right == other.pivot_right
    }
}

impl Eq for IndicatorParams {}

impl IndicatorParams {
    pub fn lookback(&self) -> PivotLookback {
        PivotLookback {
            left: self.pivot_left,
            right: self.pivot_right,
        }
    }
}

/// All per-bar derived series for one run, aligned to the source bars.
/// Owned exclusively by the run that produced it and discarded afterward;
/// nothing in here is cached or persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivedSeries {
    pub macd: MacdSeries,
    pub zones: Vec<Zone>,
    pub momentum: Vec<MomentumTag>,
    pub divergence: DivergenceMarkers,
}

/// Recompute every derived series from scratch.
///
/// Pure and deterministic: identical inputs produce bit-identical outputs,
/// so the caller may compare runs directly for change detection.
pub fn compute_derived(series: &OhlcvTimeSeries, params: &IndicatorParams) -> DerivedSeries {
    let macd = MacdSeries::compute(
        &series.close_prices,
        params.fast_len,
        params.slow_len,
        params.signal_len,
    );

    let zones = zone::classify_series(&macd.macd, params.chop_threshold);
    let momentum = momentum::tag_series(&macd.histogram);

    let divergence = if params.detect_divergence {
        divergence::detect(
            &macd.macd,
            &series.low_prices,
            &series.high_prices,
            params.lookback(),
        )
    } else {
        DivergenceMarkers::empty(series.bars())
    };

    DerivedSeries {
        macd,
        zones,
        momentum,
        divergence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_series(n: usize) -> OhlcvTimeSeries {
        let ts: Vec<i64> = (0..n as i64).map(|i| i * 86_400_000).collect();
        let close: Vec<f64> = (0..n)
            .map(|i| 100.0 + (i as f64 * 0.7).sin() * 8.0)
            .collect();
        let open = close.clone();
        let high: Vec<f64> = close.iter().map(|c| c + 1.0).collect();
        let low: Vec<f64> = close.iter().map(|c| c - 1.0).collect();
        OhlcvTimeSeries::from_columns("TEST".into(), "1d".into(), ts, open, high, low, close)
            .unwrap()
    }

    #[test]
    fn all_derived_columns_are_aligned_to_the_bars() {
        let series = sample_series(50);
        let derived = compute_derived(&series, &IndicatorParams::default());

        assert_eq!(derived.macd.len(), 50);
        assert_eq!(derived.zones.len(), 50);
        assert_eq!(derived.momentum.len(), 50);
        assert_eq!(derived.divergence.bullish.len(), 50);
        assert_eq!(derived.divergence.bearish.len(), 50);
    }

    #[test]
    fn recomputation_is_bit_identical() {
        let series = sample_series(120);
        let params = IndicatorParams::default();
        let first = compute_derived(&series, &params);
        let second = compute_derived(&series, &params);
        assert_eq!(first, second, "the pipeline must be pure and deterministic");
    }

    #[test]
    fn divergence_toggle_clears_markers_without_touching_other_series() {
        let series = sample_series(120);
        let mut params = IndicatorParams {
            pivot_left: 2,
            pivot_right: 2,
            ..IndicatorParams::default()
        };

        let with = compute_derived(&series, &params);
        params.detect_divergence = false;
        let without = compute_derived(&series, &params);

        assert!(!without.divergence.has_any());
        assert_eq!(with.macd, without.macd);
        assert_eq!(with.zones, without.zones);
        assert_eq!(with.momentum, without.momentum);
    }

    #[test]
    fn params_equality_tracks_threshold_bit_patterns() {
        let a = IndicatorParams::default();
        let mut b = a.clone();
        assert_eq!(a, b);
        b.chop_threshold += 0.1;
        assert_ne!(a, b);
    }
}
