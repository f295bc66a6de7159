//! Histogram momentum tags.
//!
//! A rendering-only, four-way emphasis classification of each histogram bar
//! against its predecessor. It carries no forward-looking signal.

/// Emphasis tag for one histogram bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MomentumTag {
    /// Positive histogram, growing
    StrongBullish,
    /// Positive histogram, flat or shrinking
    WeakBullish,
    /// Negative histogram, deepening
    StrongBearish,
    /// Negative histogram, flat or recovering
    WeakBearish,
}

impl MomentumTag {
    pub fn is_bullish(&self) -> bool {
        matches!(self, MomentumTag::StrongBullish | MomentumTag::WeakBullish)
    }

    pub fn is_strong(&self) -> bool {
        matches!(self, MomentumTag::StrongBullish | MomentumTag::StrongBearish)
    }
}

/// Tag one bar. The first bar has no predecessor and resolves to the weak
/// variant of its sign.
pub fn tag(histogram: f64, prev: Option<f64>) -> MomentumTag {
    if histogram >= 0.0 {
        match prev {
            Some(prev) if histogram > prev => MomentumTag::StrongBullish,
            _ => MomentumTag::WeakBullish,
        }
    } else {
        match prev {
            Some(prev) if histogram < prev => MomentumTag::StrongBearish,
            _ => MomentumTag::WeakBearish,
        }
    }
}

pub fn tag_series(histogram: &[f64]) -> Vec<MomentumTag> {
    let mut prev: Option<f64> = None;
    histogram
        .iter()
        .map(|&value| {
            let result = tag(value, prev);
            prev = Some(value);
            result
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_bar_is_weak_for_either_sign() {
        assert_eq!(tag(0.3, None), MomentumTag::WeakBullish);
        assert_eq!(tag(-0.3, None), MomentumTag::WeakBearish);
        assert_eq!(tag(0.0, None), MomentumTag::WeakBullish);
    }

    #[test]
    fn growing_positive_histogram_is_strong_bullish() {
        let tags = tag_series(&[0.1, 0.2, 0.2, 0.15]);
        assert_eq!(
            tags,
            vec![
                MomentumTag::WeakBullish,   // no predecessor
                MomentumTag::StrongBullish, // rising
                MomentumTag::WeakBullish,   // flat
                MomentumTag::WeakBullish,   // shrinking but still positive
            ]
        );
    }

    #[test]
    fn deepening_negative_histogram_is_strong_bearish() {
        let tags = tag_series(&[-0.1, -0.2, -0.2, -0.05]);
        assert_eq!(
            tags,
            vec![
                MomentumTag::WeakBearish,
                MomentumTag::StrongBearish,
                MomentumTag::WeakBearish,
                MomentumTag::WeakBearish,
            ]
        );
    }

    #[test]
    fn sign_flip_compares_against_the_previous_value_not_zero() {
        // -0.1 -> 0.05: positive and above the predecessor, so strong bullish
        let tags = tag_series(&[-0.1, 0.05]);
        assert_eq!(tags[1], MomentumTag::StrongBullish);
    }
}
