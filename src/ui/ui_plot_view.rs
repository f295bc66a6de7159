use std::sync::Arc;

use eframe::egui::{self, Stroke};
use egui_plot::{
    AxisHints, Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Corner, HLine, Legend, Line, LineStyle,
    MarkerShape, Plot, PlotPoints, Points, Polygon,
};
use itertools::Itertools;

use crate::analysis::{DerivedSeries, IndicatorParams};
use crate::config::PLOT_CONFIG;
use crate::domain::CandleType;
use crate::indicators::macd::MacdSeries;
use crate::indicators::momentum::MomentumTag;
use crate::indicators::zone::Zone;
use crate::models::OhlcvTimeSeries;
use crate::ui::config::UI_TEXT;
use crate::ui::utils::format_price;
use crate::utils::{maths_utils, time_utils};

// Bars are plotted against their index; the axis formatter maps indices back
// to dates. Both plots share the same x mapping so they scroll in lockstep.

/// Candlestick chart for the primary series.
pub fn show_price_chart(ui: &mut egui::Ui, series: &OhlcvTimeSeries, height: f32) {
    let timestamps = Arc::new(series.timestamps_ms.clone());

    let boxes: Vec<BoxElem> = (0..series.bars())
        .map(|i| {
            let candle = series.get_candle(i);
            let (body_low, body_high) = candle.body_range();
            let color = match candle.get_type() {
                CandleType::Bullish => PLOT_CONFIG.candle_bull_color,
                CandleType::Bearish => PLOT_CONFIG.candle_bear_color,
            };

            BoxElem::new(
                i as f64,
                BoxSpread::new(
                    candle.low_price,
                    body_low,
                    (body_low + body_high) / 2.0,
                    body_high,
                    candle.high_price,
                ),
            )
            .box_width(PLOT_CONFIG.candle_body_width)
            .fill(color)
            .stroke(Stroke::new(1.0, color))
        })
        .collect();

    let x_max = series.bars() as f64;
    let (y_min, y_max) = padded_bounds(
        maths_utils::get_min(&series.low_prices),
        maths_utils::get_max(&series.high_prices),
    );

    Plot::new("price_plot")
        .height(height)
        .legend(Legend::default().position(Corner::RightTop))
        .custom_x_axes(vec![date_axis(Arc::clone(&timestamps))])
        .custom_y_axes(vec![price_axis()])
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds_x(-1.0..=x_max);
            plot_ui.set_plot_bounds_y(y_min..=y_max);
            plot_ui.box_plot(BoxPlot::new(UI_TEXT.price_legend, boxes));
        });
}

/// MACD money map: histogram, chop band, zone-colored MACD, signal line and
/// divergence markers.
pub fn show_oscillator_chart(
    ui: &mut egui::Ui,
    series: &OhlcvTimeSeries,
    derived: &DerivedSeries,
    params: &IndicatorParams,
    height: f32,
) {
    let macd = &derived.macd;
    let threshold = params.chop_threshold;
    let x_max = macd.len() as f64;
    let timestamps = Arc::new(series.timestamps_ms.clone());

    // Histogram bars, emphasised by momentum tag
    let bars: Vec<Bar> = macd
        .histogram
        .iter()
        .zip(&derived.momentum)
        .enumerate()
        .map(|(i, (&value, tag))| {
            Bar::new(i as f64, value)
                .width(PLOT_CONFIG.histogram_bar_width)
                .fill(momentum_color(*tag))
        })
        .collect();

    // Zone-masked MACD overlays: contiguous index runs sharing a zone
    let bull_segments = zone_segments(&macd.macd, &derived.zones, Zone::Bullish);
    let bear_segments = zone_segments(&macd.macd, &derived.zones, Zone::Bearish);

    let (y_min, y_max) = oscillator_bounds(macd, threshold);

    Plot::new("oscillator_plot")
        .height(height)
        .legend(Legend::default().position(Corner::RightTop))
        .custom_x_axes(vec![date_axis(Arc::clone(&timestamps))])
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds_x(-1.0..=x_max);
            plot_ui.set_plot_bounds_y(y_min..=y_max);

            // A. Chop band between -threshold and +threshold
            if threshold > 0.0 {
                let band = PlotPoints::new(vec![
                    [-1.0, -threshold],
                    [x_max, -threshold],
                    [x_max, threshold],
                    [-1.0, threshold],
                ]);
                plot_ui.polygon(
                    Polygon::new(UI_TEXT.chop_zone_legend, band)
                        .fill_color(PLOT_CONFIG.chop_band_color)
                        .stroke(Stroke::NONE),
                );
                for boundary in [threshold, -threshold] {
                    plot_ui.hline(
                        HLine::new(UI_TEXT.chop_zone_legend, boundary)
                            .color(PLOT_CONFIG.chop_boundary_color)
                            .width(1.0)
                            .style(LineStyle::dashed_loose()),
                    );
                }
            }
            plot_ui.hline(
                HLine::new(UI_TEXT.zero_line_legend, 0.0)
                    .color(PLOT_CONFIG.zero_line_color)
                    .width(1.0),
            );

            // B. Histogram
            plot_ui.bar_chart(BarChart::new(UI_TEXT.histogram_legend, bars));

            // C. MACD, base line first so the zone overlays sit on top
            plot_ui.line(
                Line::new(UI_TEXT.macd_chop_legend, indexed_points(&macd.macd))
                    .color(PLOT_CONFIG.macd_chop_color)
                    .width(PLOT_CONFIG.macd_base_line_width),
            );
            for segment in bull_segments {
                plot_ui.line(
                    Line::new(UI_TEXT.macd_bull_legend, PlotPoints::new(segment))
                        .color(PLOT_CONFIG.macd_bull_color)
                        .width(PLOT_CONFIG.macd_zone_line_width),
                );
            }
            for segment in bear_segments {
                plot_ui.line(
                    Line::new(UI_TEXT.macd_bear_legend, PlotPoints::new(segment))
                        .color(PLOT_CONFIG.macd_bear_color)
                        .width(PLOT_CONFIG.macd_zone_line_width),
                );
            }

            plot_ui.line(
                Line::new(UI_TEXT.signal_legend, indexed_points(&macd.signal))
                    .color(PLOT_CONFIG.signal_color)
                    .width(PLOT_CONFIG.macd_base_line_width),
            );

            // D. Divergence markers at the pivot's MACD height
            if params.detect_divergence {
                let bull_markers = marker_points(&derived.divergence.bullish);
                if !bull_markers.is_empty() {
                    plot_ui.points(
                        Points::new(UI_TEXT.bull_div_legend, PlotPoints::new(bull_markers))
                            .shape(MarkerShape::Up)
                            .radius(PLOT_CONFIG.div_marker_radius)
                            .color(PLOT_CONFIG.bull_div_color),
                    );
                }
                let bear_markers = marker_points(&derived.divergence.bearish);
                if !bear_markers.is_empty() {
                    plot_ui.points(
                        Points::new(UI_TEXT.bear_div_legend, PlotPoints::new(bear_markers))
                            .shape(MarkerShape::Down)
                            .radius(PLOT_CONFIG.div_marker_radius)
                            .color(PLOT_CONFIG.bear_div_color),
                    );
                }
            }
        });
}

// ============================================================================
// Helper functions (private to this module)
// ============================================================================

fn indexed_points(values: &[f64]) -> PlotPoints<'static> {
    PlotPoints::new(
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| [i as f64, value])
            .collect(),
    )
}

fn marker_points(markers: &[Option<f64>]) -> Vec<[f64; 2]> {
    markers
        .iter()
        .enumerate()
        .filter_map(|(i, value)| value.map(|y| [i as f64, y]))
        .collect()
}

/// Split `values` into contiguous runs whose bar is classified as `zone`.
/// Each run renders as its own line; sharing the legend name merges them
/// into a single legend entry.
fn zone_segments(values: &[f64], zones: &[Zone], zone: Zone) -> Vec<Vec<[f64; 2]>> {
    let mut segments = Vec::new();
    let grouped = values
        .iter()
        .zip(zones)
        .enumerate()
        .chunk_by(|&(_, (_, bar_zone))| *bar_zone == zone);

    for (matches, group) in &grouped {
        if matches {
            segments.push(group.map(|(i, (&value, _))| [i as f64, value]).collect());
        }
    }
    segments
}

fn momentum_color(tag: MomentumTag) -> egui::Color32 {
    let base = if tag.is_bullish() {
        PLOT_CONFIG.hist_bull_color
    } else {
        PLOT_CONFIG.hist_bear_color
    };
    if tag.is_strong() {
        base
    } else {
        base.linear_multiply(PLOT_CONFIG.weak_momentum_opacity)
    }
}

fn padded_bounds(min: f64, max: f64) -> (f64, f64) {
    let span = (max - min).abs().max(f64::MIN_POSITIVE);
    let margin = span * PLOT_CONFIG.bounds_margin_pct;
    (min - margin, max + margin)
}

fn oscillator_bounds(macd: &MacdSeries, threshold: f64) -> (f64, f64) {
    let mut low = -threshold;
    let mut high = threshold;
    for line in [&macd.macd, &macd.signal, &macd.histogram] {
        if !line.is_empty() {
            low = low.min(maths_utils::get_min(line));
            high = high.max(maths_utils::get_max(line));
        }
    }
    padded_bounds(low, high)
}

fn date_axis(timestamps: Arc<Vec<i64>>) -> AxisHints<'static> {
    AxisHints::new_x().formatter(move |grid_mark, _range| {
        let idx = grid_mark.value.round() as i64;
        if idx < 0 || idx as usize >= timestamps.len() {
            return String::new();
        }
        time_utils::epoch_ms_to_utc(timestamps[idx as usize])
    })
}

fn price_axis() -> AxisHints<'static> {
    AxisHints::new_y().formatter(|grid_mark, _range| format_price(grid_mark.value))
}
