//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    pub candle_bull_color: Color32,
    pub candle_bear_color: Color32,
    // Histogram bars share the candle palette; weak-momentum bars are dimmed
    pub hist_bull_color: Color32,
    pub hist_bear_color: Color32,
    pub weak_momentum_opacity: f32,
    // MACD line colors per zone
    pub macd_chop_color: Color32,
    pub macd_bull_color: Color32,
    pub macd_bear_color: Color32,
    pub signal_color: Color32,
    // Chop band and reference lines
    pub chop_band_color: Color32,
    pub chop_boundary_color: Color32,
    pub zero_line_color: Color32,
    // Divergence markers
    pub bull_div_color: Color32,
    pub bear_div_color: Color32,
    pub div_marker_radius: f32,
    /// Width of a candle body relative to one bar of x-axis space
    pub candle_body_width: f64,
    /// Width of a histogram bar relative to one bar of x-axis space
    pub histogram_bar_width: f64,
    /// Width of the zone-colored MACD overlays
    pub macd_zone_line_width: f32,
    /// Width of the base MACD and signal lines
    pub macd_base_line_width: f32,
    /// Fraction of the price range added as breathing room above/below
    pub bounds_margin_pct: f64,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    candle_bull_color: Color32::from_rgb(0, 230, 118), // Green
    candle_bear_color: Color32::from_rgb(255, 82, 82), // Red
    hist_bull_color: Color32::from_rgb(0, 230, 118),
    hist_bear_color: Color32::from_rgb(255, 82, 82),
    weak_momentum_opacity: 0.4,
    macd_chop_color: Color32::GRAY,
    macd_bull_color: Color32::from_rgb(0, 230, 118),
    macd_bear_color: Color32::from_rgb(255, 82, 82),
    signal_color: Color32::from_rgb(255, 165, 0), // Orange
    chop_band_color: Color32::from_rgba_premultiplied(40, 40, 40, 38),
    chop_boundary_color: Color32::GRAY,
    zero_line_color: Color32::from_rgb(200, 200, 200),
    bull_div_color: Color32::from_rgb(0, 200, 0),
    bear_div_color: Color32::from_rgb(200, 0, 0),
    div_marker_radius: 6.0,
    candle_body_width: 0.6,
    histogram_bar_width: 0.8,
    macd_zone_line_width: 2.0,
    macd_base_line_width: 1.0,
    bounds_margin_pct: 0.05,
};
