use eframe::egui::{
    CentralPanel, Color32, Context, Frame, RichText, ScrollArea, SidePanel, Spinner,
    TopBottomPanel,
};

use crate::analysis::HtfBias;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::ui_panels::{
    DataSettingsEvent, DataSettingsPanel, MacdSettingsEvent, MacdSettingsPanel, Panel, RulesEvent,
    RulesPanel,
};
use crate::ui::ui_plot_view;
use crate::ui::utils::{colored_subsection_heading, spaced_separator};

use super::app::MoneyMapApp;

impl MoneyMapApp {
    pub(super) fn render_side_panel(&mut self, ctx: &Context) {
        let side_panel_frame = Frame::new().fill(UI_CONFIG.colors.side_panel);
        SidePanel::left("settings_panel")
            .min_width(220.0)
            .frame(side_panel_frame)
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    let data_events = {
                        let mut panel = DataSettingsPanel::new(
                            self.symbol_draft.clone(),
                            self.timeframe,
                            self.period,
                        );
                        panel.render(ui)
                    };
                    for event in data_events {
                        match event {
                            DataSettingsEvent::SymbolEdited(draft) => self.symbol_draft = draft,
                            DataSettingsEvent::SymbolSubmitted => self.commit_symbol(),
                            DataSettingsEvent::Timeframe(timeframe) => self.timeframe = timeframe,
                            DataSettingsEvent::Period(period) => self.period = period,
                        }
                    }
                    spaced_separator(ui);

                    let macd_events = {
                        let params = &self.indicator_params;
                        let mut panel = MacdSettingsPanel::new(
                            params.fast_len,
                            params.slow_len,
                            params.signal_len,
                        );
                        panel.render(ui)
                    };
                    for event in macd_events {
                        match event {
                            MacdSettingsEvent::Fast(len) => self.indicator_params.fast_len = len,
                            MacdSettingsEvent::Slow(len) => self.indicator_params.slow_len = len,
                            MacdSettingsEvent::Signal(len) => {
                                self.indicator_params.signal_len = len
                            }
                        }
                    }
                    spaced_separator(ui);

                    let rule_events = {
                        let params = &self.indicator_params;
                        let mut panel = RulesPanel::new(
                            params.chop_threshold,
                            params.detect_divergence,
                            params.pivot_left,
                            params.pivot_right,
                            self.show_dashboard,
                            self.htf_resolution,
                        );
                        panel.render(ui)
                    };
                    for event in rule_events {
                        match event {
                            RulesEvent::ChopThreshold(threshold) => {
                                self.indicator_params.chop_threshold = threshold.max(0.0)
                            }
                            RulesEvent::DetectDivergence(enabled) => {
                                self.indicator_params.detect_divergence = enabled
                            }
                            RulesEvent::PivotLeft(left) => self.indicator_params.pivot_left = left,
                            RulesEvent::PivotRight(right) => {
                                self.indicator_params.pivot_right = right
                            }
                            RulesEvent::ShowDashboard(enabled) => self.show_dashboard = enabled,
                            RulesEvent::HtfResolution(resolution) => {
                                self.htf_resolution = resolution
                            }
                        }
                    }

                    if self.is_fetching() {
                        ui.horizontal(|ui| {
                            ui.add(Spinner::new());
                            ui.label(UI_TEXT.loading_text);
                        });
                    }
                });
            });
    }

    fn commit_symbol(&mut self) {
        let cleaned = self.symbol_draft.trim().to_uppercase();
        self.symbol_draft = cleaned.clone();
        if !cleaned.is_empty() && cleaned != self.symbol {
            self.symbol = cleaned;
        }
    }

    pub(super) fn render_dashboard_panel(&mut self, ctx: &Context) {
        if !self.show_dashboard {
            return;
        }

        let frame = Frame::new().fill(UI_CONFIG.colors.side_panel);
        TopBottomPanel::bottom("htf_dashboard")
            .frame(frame)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    ui.label(colored_subsection_heading(UI_TEXT.htf_heading));
                    ui.separator();
                    ui.label(format!(
                        "{}: {}",
                        UI_TEXT.htf_timeframe_metric, self.htf_resolution
                    ));
                    ui.separator();

                    match &self.data_state.htf_bias {
                        Some(bias) => {
                            let color = match bias {
                                HtfBias::Bullish => UI_CONFIG.colors.bias_bull,
                                HtfBias::Bearish => UI_CONFIG.colors.bias_bear,
                                HtfBias::Unavailable(_) => UI_CONFIG.colors.bias_error,
                            };
                            ui.label(format!("{}:", UI_TEXT.htf_trend_metric));
                            ui.label(RichText::new(bias.label()).color(color).strong());
                            ui.label(RichText::new("●").color(color));
                            if let Some(guidance) = bias.guidance() {
                                ui.separator();
                                ui.label(RichText::new(guidance).color(color));
                            }
                        }
                        None => {
                            ui.label(UI_TEXT.htf_waiting);
                        }
                    }
                });
                ui.add_space(6.0);
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new().fill(UI_CONFIG.colors.central_panel);
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ui.add_space(10.0);

                // Failure of the primary fetch halts this run's pipeline
                let error_text = self.data_state.last_error.as_ref().map(|e| e.to_string());
                if let Some(text) = error_text {
                    ui.vertical_centered(|ui| {
                        ui.add_space(40.0);
                        ui.label(
                            RichText::new(text)
                                .color(Color32::from_rgb(220, 120, 120))
                                .strong(),
                        );
                        ui.label(UI_TEXT.error_hint);
                        ui.add_space(10.0);
                        if ui.button(UI_TEXT.retry_button).clicked() {
                            // Forget the failed request so ensure_market_data
                            // issues it again next frame
                            self.last_fetch_params = None;
                        }
                    });
                    return;
                }

                let (Some(series), Some(derived)) =
                    (&self.data_state.series, &self.data_state.derived)
                else {
                    ui.vertical_centered(|ui| {
                        ui.add_space(40.0);
                        ui.add(Spinner::new());
                        ui.label(UI_TEXT.loading_text);
                    });
                    return;
                };

                ui.heading(format!("{} — {}", series.symbol, self.timeframe));
                ui.add_space(4.0);

                // Price on top, oscillator below, equal heights
                let plot_height = (ui.available_height() / 2.0 - 10.0).max(120.0);
                ui_plot_view::show_price_chart(ui, series, plot_height);
                ui.add_space(4.0);
                ui_plot_view::show_oscillator_chart(
                    ui,
                    series,
                    derived,
                    &self.indicator_params,
                    plot_height,
                );
            });
    }
}
