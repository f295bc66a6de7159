//! Pivot-based price/oscillator divergence scan.

use crate::utils::maths_utils;

/// Symmetric pivot confirmation window: `left` bars behind, `right` bars
/// ahead. Both must be at least 1 for a pivot to mean anything; the UI
/// widgets enforce that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PivotLookback {
    pub left: usize,
    pub right: usize,
}

/// Per-bar marker series, `Some(macd)` only at flagged pivot indices. The
/// stored value is the MACD height the marker is plotted at.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DivergenceMarkers {
    pub bullish: Vec<Option<f64>>,
    pub bearish: Vec<Option<f64>>,
}

impl DivergenceMarkers {
    pub fn empty(len: usize) -> Self {
        DivergenceMarkers {
            bullish: vec![None; len],
            bearish: vec![None; len],
        }
    }

    pub fn has_any(&self) -> bool {
        self.bullish.iter().any(Option::is_some) || self.bearish.iter().any(Option::is_some)
    }
}

/// Scan the MACD line for divergence against price extremes.
///
/// Index i is a low (high) pivot iff MACD[i] equals the minimum (maximum) of
/// MACD over the closed window `[i - left, i + right]`. Pivots are discovered
/// left-to-right and each pivot type remembers only the single most recently
/// confirmed pivot, so every comparison is against the immediately preceding
/// pivot of the same type - never the best-of-N. On a new low pivot whose
/// price Low is lower while its MACD is higher than the remembered low pivot,
/// the bar is tagged as bullish divergence; symmetric rule for high pivots.
///
/// A bar on a flat window can be both window minimum and maximum. The low
/// check runs first and both checks run independently, so both trackers
/// update and both marker types may fire at the same index.
pub fn detect(
    macd: &[f64],
    lows: &[f64],
    highs: &[f64],
    lookback: PivotLookback,
) -> DivergenceMarkers {
    let len = macd.len();
    debug_assert_eq!(lows.len(), len);
    debug_assert_eq!(highs.len(), len);

    let mut markers = DivergenceMarkers::empty(len);
    if lookback.left + lookback.right + 1 > len {
        // Not enough bars for a single complete window
        return markers;
    }

    // (macd, price) of the most recently confirmed pivot of each type
    let mut last_low_pivot: Option<(f64, f64)> = None;
    let mut last_high_pivot: Option<(f64, f64)> = None;

    for i in lookback.left..(len - lookback.right) {
        let window = &macd[i - lookback.left..=i + lookback.right];

        // --- Low pivot: MACD is the window minimum ---
        if macd[i] == maths_utils::get_min(window) {
            if let Some((prev_macd, prev_low)) = last_low_pivot {
                // Price made a lower low while the oscillator made a higher low
                if lows[i] < prev_low && macd[i] > prev_macd {
                    markers.bullish[i] = Some(macd[i]);
                }
            }
            last_low_pivot = Some((macd[i], lows[i]));
        }

        // --- High pivot: MACD is the window maximum ---
        if macd[i] == maths_utils::get_max(window) {
            if let Some((prev_macd, prev_high)) = last_high_pivot {
                if highs[i] > prev_high && macd[i] < prev_macd {
                    markers.bearish[i] = Some(macd[i]);
                }
            }
            last_high_pivot = Some((macd[i], highs[i]));
        }
    }

    markers
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOOKBACK: PivotLookback = PivotLookback { left: 2, right: 2 };

    /// 20-bar MACD shape with low pivots at 4 and 12 (higher second low) and
    /// a single high pivot at 8.
    fn pivot_macd() -> Vec<f64> {
        vec![
            0.5, 0.4, 0.3, 0.1, -1.0, 0.1, 0.3, 0.5, 0.6, 0.5, 0.3, 0.0, -0.5, 0.1, 0.4, 0.6,
            0.7, 0.8, 0.9, 1.0,
        ]
    }

    #[test]
    fn bullish_divergence_fires_at_the_second_pivot() {
        let macd = pivot_macd();
        let mut lows = vec![10.0; macd.len()];
        lows[4] = 9.0; // first price low
        lows[12] = 8.5; // lower price low, while MACD made a higher low
        let highs = vec![11.0; macd.len()];

        let markers = detect(&macd, &lows, &highs, LOOKBACK);

        assert_eq!(markers.bullish[12], Some(-0.5), "marker plots at the pivot MACD");
        let fired: Vec<usize> = markers
            .bullish
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|_| i))
            .collect();
        assert_eq!(fired, vec![12], "only the second pivot is tagged");
        assert!(markers.bearish.iter().all(Option::is_none));
    }

    #[test]
    fn no_divergence_when_price_and_oscillator_agree() {
        let macd = pivot_macd();
        let mut lows = vec![10.0; macd.len()];
        lows[4] = 8.5;
        lows[12] = 9.0; // higher price low + higher MACD low: agreement
        let highs = vec![11.0; macd.len()];

        let markers = detect(&macd, &lows, &highs, LOOKBACK);
        assert!(!markers.has_any());
    }

    #[test]
    fn bearish_divergence_mirrors_the_bullish_rule() {
        // Mirror the bullish fixture: high pivots at 4 and 12, lower second
        // MACD high while price pushes a higher high.
        let macd: Vec<f64> = pivot_macd().iter().map(|v| -v).collect();
        let lows = vec![9.0; macd.len()];
        let mut highs = vec![10.0; macd.len()];
        highs[4] = 11.0;
        highs[12] = 11.5;

        let markers = detect(&macd, &lows, &highs, LOOKBACK);
        assert_eq!(markers.bearish[12], Some(0.5));
        assert!(markers.bullish.iter().all(Option::is_none));
    }

    #[test]
    fn markers_only_appear_at_verified_window_extrema() {
        let macd = pivot_macd();
        let mut lows = vec![10.0; macd.len()];
        lows[4] = 9.0;
        lows[12] = 8.5;
        let mut highs = vec![11.0; macd.len()];
        highs[8] = 12.0;

        let markers = detect(&macd, &lows, &highs, LOOKBACK);

        for (i, marker) in markers.bullish.iter().enumerate() {
            if marker.is_some() {
                let window = &macd[i - LOOKBACK.left..=i + LOOKBACK.right];
                assert_eq!(macd[i], maths_utils::get_min(window), "bar {} is not a low pivot", i);
            }
        }
        for (i, marker) in markers.bearish.iter().enumerate() {
            if marker.is_some() {
                let window = &macd[i - LOOKBACK.left..=i + LOOKBACK.right];
                assert_eq!(macd[i], maths_utils::get_max(window), "bar {} is not a high pivot", i);
            }
        }
    }

    #[test]
    fn comparison_is_against_the_most_recent_pivot_only() {
        // Three low pivots: P1 (macd -1.0, low 9.0), P2 (macd -2.0, low 10.0),
        // P3 (macd -1.5, low 9.5). Against P2 this is a lower price low with a
        // higher MACD low, so P3 fires - even though against P1 it would not.
        let macd = vec![
            0.5, 0.3, -1.0, 0.3, 0.5, 0.6, -2.0, 0.6, 0.5, 0.4, -1.5, 0.4, 0.5,
        ];
        let mut lows = vec![12.0; macd.len()];
        lows[2] = 9.0;
        lows[6] = 10.0;
        lows[10] = 9.5;
        let highs = vec![13.0; macd.len()];

        let markers = detect(&macd, &lows, &highs, LOOKBACK);
        assert_eq!(markers.bullish[10], Some(-1.5));
    }

    #[test]
    fn flat_series_produces_pivots_but_no_markers() {
        // Every bar is both window min and max; equal prices and MACD values
        // never satisfy the strict inequalities.
        let macd = vec![0.25; 12];
        let lows = vec![10.0; 12];
        let highs = vec![11.0; 12];

        let markers = detect(&macd, &lows, &highs, LOOKBACK);
        assert!(!markers.has_any());
    }

    #[test]
    fn series_shorter_than_one_window_yields_no_markers() {
        let markers = detect(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], LOOKBACK);
        assert_eq!(markers.bullish.len(), 3);
        assert!(!markers.has_any());
    }
}
