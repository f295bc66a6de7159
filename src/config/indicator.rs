//! Indicator defaults and widget bounds

/// Default MACD lengths (the classic 12/26/9 set)
pub struct MacdDefaults {
    pub fast_len: u32,
    pub slow_len: u32,
    pub signal_len: u32,
}

/// Bounds for the MACD length widgets.
/// Degenerate combinations (fast >= slow) are allowed on purpose; the
/// formula still produces a well-defined series.
pub struct MacdLengthBounds {
    pub min: u32,
    pub max: u32,
}

/// Settings for the divergence scan controls
pub struct PivotSettings {
    pub default_left: usize,
    pub default_right: usize,
    // A pivot needs at least one confirming bar on each side
    pub min_lookback: usize,
    pub max_lookback: usize,
}

/// Settings for the chop-zone distance rule
pub struct ChopSettings {
    pub default_threshold: f64,
    pub threshold_step: f64,
}

/// The Master Indicator Configuration
pub struct IndicatorConfig {
    pub macd: MacdDefaults,
    pub lengths: MacdLengthBounds,
    pub chop: ChopSettings,
    pub pivot: PivotSettings,
}

pub const INDICATOR: IndicatorConfig = IndicatorConfig {
    macd: MacdDefaults {
        fast_len: 12,
        slow_len: 26,
        signal_len: 9,
    },

    lengths: MacdLengthBounds { min: 1, max: 500 },

    chop: ChopSettings {
        default_threshold: 0.5,
        threshold_step: 0.1,
    },

    pivot: PivotSettings {
        default_left: 5,
        default_right: 5,
        min_lookback: 1,
        max_lookback: 50,
    },
};
