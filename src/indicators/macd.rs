//! MACD (Moving Average Convergence Divergence)
//!
//! MACD = EMA(close, fast) - EMA(close, slow)
//! Signal = EMA(MACD, signal)
//! Histogram = MACD - Signal

/// Exponential moving average with span-derived smoothing, alpha = 2/(span+1).
///
/// Seeded with the first input value and carried forward bar-by-bar, so the
/// output is aligned 1:1 with the input and the first element is defined
/// immediately. There is no simple-average warm-up phase.
pub fn ema(values: &[f64], span: u32) -> Vec<f64> {
    let alpha = 2.0 / (span as f64 + 1.0);

    let mut out = Vec::with_capacity(values.len());
    let mut prev = 0.0;
    for (i, &value) in values.iter().enumerate() {
        let next = if i == 0 {
            value
        } else {
            alpha * value + (1.0 - alpha) * prev
        };
        out.push(next);
        prev = next;
    }
    out
}

/// The three oscillator lines, each aligned to the close-price input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MacdSeries {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

impl MacdSeries {
    /// Compute MACD, signal and histogram over `closes`.
    ///
    /// Degenerate period combinations (e.g. fast >= slow) are not rejected;
    /// the formula still executes and produces a well-defined, if
    /// non-conventional, series. An empty input yields three empty lines.
    pub fn compute(closes: &[f64], fast_len: u32, slow_len: u32, signal_len: u32) -> Self {
        let ema_fast = ema(closes, fast_len);
        let ema_slow = ema(closes, slow_len);

        let macd: Vec<f64> = ema_fast
            .iter()
            .zip(&ema_slow)
            .map(|(fast, slow)| fast - slow)
            .collect();
        let signal = ema(&macd, signal_len);
        let histogram = macd
            .iter()
            .zip(&signal)
            .map(|(macd, signal)| macd - signal)
            .collect();

        MacdSeries {
            macd,
            signal,
            histogram,
        }
    }

    pub fn len(&self) -> usize {
        self.macd.len()
    }

    pub fn is_empty(&self) -> bool {
        self.macd.is_empty()
    }

    /// Most recent MACD value, `None` on an empty series.
    pub fn latest_macd(&self) -> Option<f64> {
        self.macd.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_produces_empty_lines() {
        let result = MacdSeries::compute(&[], 12, 26, 9);
        assert!(result.is_empty());
        assert!(result.signal.is_empty());
        assert!(result.histogram.is_empty());
    }

    #[test]
    fn ema_is_seeded_with_the_first_value() {
        let values = [10.0, 11.0, 12.0];
        let result = ema(&values, 5);
        assert_eq!(result.len(), 3);
        assert_eq!(result[0], 10.0);

        // alpha = 2/6; second value = alpha*11 + (1-alpha)*10
        let alpha = 2.0 / 6.0;
        assert!((result[1] - (alpha * 11.0 + (1.0 - alpha) * 10.0)).abs() < 1e-12);
    }

    #[test]
    fn constant_input_yields_identically_zero_oscillator() {
        let closes = vec![42.5; 60];
        let result = MacdSeries::compute(&closes, 12, 26, 9);

        // Both EMAs are seeded with the same value and never move, so the
        // difference is exactly zero everywhere - not merely converging.
        for i in 0..result.len() {
            assert_eq!(result.macd[i], 0.0, "macd[{}]", i);
            assert_eq!(result.signal[i], 0.0, "signal[{}]", i);
            assert_eq!(result.histogram[i], 0.0, "histogram[{}]", i);
        }
    }

    #[test]
    fn histogram_is_macd_minus_signal_everywhere() {
        let closes: Vec<f64> = (0..80).map(|i| 100.0 + (i as f64 * 0.37).sin() * 5.0).collect();
        let result = MacdSeries::compute(&closes, 12, 26, 9);
        for i in 0..result.len() {
            let expected = result.macd[i] - result.signal[i];
            assert!(
                (result.histogram[i] - expected).abs() < 1e-12,
                "histogram[{}] = {} but macd - signal = {}",
                i,
                result.histogram[i],
                expected,
            );
        }
    }

    #[test]
    fn first_macd_value_is_defined_and_zero() {
        // Seeded EMAs agree on the first bar regardless of their spans.
        let closes = [3.0, 4.0, 5.0];
        let result = MacdSeries::compute(&closes, 12, 26, 9);
        assert_eq!(result.macd[0], 0.0);
    }

    #[test]
    fn degenerate_periods_still_produce_a_full_series() {
        // fast >= slow is non-conventional but must not panic or truncate
        let closes: Vec<f64> = (0..30).map(|i| i as f64).collect();
        let result = MacdSeries::compute(&closes, 26, 12, 9);
        assert_eq!(result.len(), closes.len());
        // A rising series with inverted spans yields a negative oscillator.
        assert!(result.macd[closes.len() - 1] < 0.0);
    }
}
