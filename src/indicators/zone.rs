//! Zone classification: distance-from-zero rule for the MACD line.

/// Trading zone for a single bar, derived from the MACD value alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Bullish,
    Bearish,
    Chop,
}

/// Classify one MACD value against the chop-zone distance threshold.
///
/// Stateless per-bar rule; ties at exactly +/- threshold resolve to Chop.
pub fn classify(macd_value: f64, threshold: f64) -> Zone {
    if macd_value > threshold {
        Zone::Bullish
    } else if macd_value < -threshold {
        Zone::Bearish
    } else {
        Zone::Chop
    }
}

pub fn classify_series(macd: &[f64], threshold: f64) -> Vec<Zone> {
    macd.iter().map(|&value| classify(value, threshold)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_follows_the_distance_rule() {
        assert_eq!(classify(0.6, 0.5), Zone::Bullish);
        assert_eq!(classify(-0.6, 0.5), Zone::Bearish);
        assert_eq!(classify(0.2, 0.5), Zone::Chop);
        assert_eq!(classify(-0.2, 0.5), Zone::Chop);
    }

    #[test]
    fn ties_at_the_threshold_resolve_to_chop() {
        assert_eq!(classify(0.5, 0.5), Zone::Chop);
        assert_eq!(classify(-0.5, 0.5), Zone::Chop);
    }

    #[test]
    fn zero_threshold_leaves_chop_only_at_exactly_zero() {
        assert_eq!(classify(f64::MIN_POSITIVE, 0.0), Zone::Bullish);
        assert_eq!(classify(-f64::MIN_POSITIVE, 0.0), Zone::Bearish);
        assert_eq!(classify(0.0, 0.0), Zone::Chop);
    }

    #[test]
    fn huge_threshold_classifies_everything_as_chop() {
        let macd = [-3.0, -0.1, 0.0, 0.1, 3.0];
        let zones = classify_series(&macd, 1e9);
        assert!(zones.iter().all(|z| *z == Zone::Chop));
    }
}
