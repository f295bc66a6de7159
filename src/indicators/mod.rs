// ============================================================================
// Indicator Engine
// ============================================================================
//
// Pure, side-effect-free oscillator math behind the money map: MACD, zone
// classification, histogram momentum tags and the pivot-based divergence
// scan. Nothing in here touches the network or the UI.

pub mod divergence;
pub mod macd;
pub mod momentum;
pub mod zone;

pub use divergence::{DivergenceMarkers, PivotLookback};
pub use macd::MacdSeries;
pub use momentum::MomentumTag;
pub use zone::Zone;
