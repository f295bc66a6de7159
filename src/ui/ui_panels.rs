use eframe::egui::{Checkbox, Color32, ComboBox, DragValue, RichText, TextEdit, Ui};
use strum::IntoEnumIterator;

use crate::config::INDICATOR;
use crate::domain::{HistoryPeriod, HtfResolution, Timeframe};
use crate::ui::config::UI_TEXT;
use crate::ui::utils::{colored_subsection_heading, section_heading};

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

// ============================================================================
// 1. DATA SETTINGS (symbol / timeframe / period)
// ============================================================================

pub struct DataSettingsPanel {
    symbol_draft: String,
    timeframe: Timeframe,
    period: HistoryPeriod,
}

#[derive(Debug)]
pub enum DataSettingsEvent {
    SymbolEdited(String),
    SymbolSubmitted,
    Timeframe(Timeframe),
    Period(HistoryPeriod),
}

impl DataSettingsPanel {
    pub fn new(symbol_draft: String, timeframe: Timeframe, period: HistoryPeriod) -> Self {
        Self {
            symbol_draft,
            timeframe,
            period,
        }
    }
}

impl Panel for DataSettingsPanel {
    type Event = DataSettingsEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.data_settings_heading);

        ui.label(colored_subsection_heading(UI_TEXT.symbol_label));
        let response = ui.add(
            TextEdit::singleline(&mut self.symbol_draft)
                .hint_text(UI_TEXT.symbol_hint)
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            events.push(DataSettingsEvent::SymbolEdited(self.symbol_draft.clone()));
        }
        // Pressing Enter also drops focus, so this covers both commit paths
        if response.lost_focus() {
            events.push(DataSettingsEvent::SymbolSubmitted);
        }

        ui.add_space(5.0);
        ComboBox::from_label(UI_TEXT.timeframe_label)
            .selected_text(self.timeframe.to_string())
            .show_ui(ui, |ui| {
                for timeframe in Timeframe::iter() {
                    if ui
                        .selectable_value(&mut self.timeframe, timeframe, timeframe.to_string())
                        .changed()
                    {
                        events.push(DataSettingsEvent::Timeframe(timeframe));
                    }
                }
            });

        ComboBox::from_label(UI_TEXT.period_label)
            .selected_text(self.period.to_string())
            .show_ui(ui, |ui| {
                for period in HistoryPeriod::iter() {
                    if ui
                        .selectable_value(&mut self.period, period, period.to_string())
                        .changed()
                    {
                        events.push(DataSettingsEvent::Period(period));
                    }
                }
            });

        events
    }
}

// ============================================================================
// 2. MACD SETTINGS (fast / slow / signal lengths)
// ============================================================================

pub struct MacdSettingsPanel {
    fast_len: u32,
    slow_len: u32,
    signal_len: u32,
}

#[derive(Debug)]
pub enum MacdSettingsEvent {
    Fast(u32),
    Slow(u32),
    Signal(u32),
}

impl MacdSettingsPanel {
    pub fn new(fast_len: u32, slow_len: u32, signal_len: u32) -> Self {
        Self {
            fast_len,
            slow_len,
            signal_len,
        }
    }

    fn length_row(
        ui: &mut Ui,
        label: &str,
        value: &mut u32,
    ) -> bool {
        let bounds = &INDICATOR.lengths;
        let mut changed = false;
        ui.horizontal(|ui| {
            ui.label(label);
            changed = ui
                .add(DragValue::new(value).range(bounds.min..=bounds.max))
                .changed();
        });
        changed
    }
}

impl Panel for MacdSettingsPanel {
    type Event = MacdSettingsEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.macd_settings_heading);

        if Self::length_row(ui, UI_TEXT.fast_label, &mut self.fast_len) {
            events.push(MacdSettingsEvent::Fast(self.fast_len));
        }
        if Self::length_row(ui, UI_TEXT.slow_label, &mut self.slow_len) {
            events.push(MacdSettingsEvent::Slow(self.slow_len));
        }
        if Self::length_row(ui, UI_TEXT.signal_label, &mut self.signal_len) {
            events.push(MacdSettingsEvent::Signal(self.signal_len));
        }

        events
    }
}

// ============================================================================
// 3. MONEY MAP RULES (chop zone / divergence / HTF dashboard)
// ============================================================================

pub struct RulesPanel {
    chop_threshold: f64,
    detect_divergence: bool,
    pivot_left: usize,
    pivot_right: usize,
    show_dashboard: bool,
    htf_resolution: HtfResolution,
}

#[derive(Debug)]
pub enum RulesEvent {
    ChopThreshold(f64),
    DetectDivergence(bool),
    PivotLeft(usize),
    PivotRight(usize),
    ShowDashboard(bool),
    HtfResolution(HtfResolution),
}

impl RulesPanel {
    pub fn new(
        chop_threshold: f64,
        detect_divergence: bool,
        pivot_left: usize,
        pivot_right: usize,
        show_dashboard: bool,
        htf_resolution: HtfResolution,
    ) -> Self {
        Self {
            chop_threshold,
            detect_divergence,
            pivot_left,
            pivot_right,
            show_dashboard,
            htf_resolution,
        }
    }
}

impl Panel for RulesPanel {
    type Event = RulesEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.rules_heading);

        // System 1: Distance Rule
        ui.label(colored_subsection_heading(UI_TEXT.chop_threshold_label));
        let response = ui.add(
            DragValue::new(&mut self.chop_threshold)
                .range(0.0..=f64::INFINITY)
                .speed(INDICATOR.chop.threshold_step),
        );
        if response.changed() {
            events.push(RulesEvent::ChopThreshold(self.chop_threshold));
        }
        ui.label(
            RichText::new(UI_TEXT.chop_threshold_helper)
                .small()
                .color(Color32::GRAY),
        );

        ui.add_space(10.0);

        // System 2: Divergence
        if ui
            .add(Checkbox::new(
                &mut self.detect_divergence,
                UI_TEXT.divergence_label,
            ))
            .changed()
        {
            events.push(RulesEvent::DetectDivergence(self.detect_divergence));
        }
        if self.detect_divergence {
            let pivot = &INDICATOR.pivot;
            ui.horizontal(|ui| {
                ui.label(UI_TEXT.pivot_left_label);
                if ui
                    .add(DragValue::new(&mut self.pivot_left).range(pivot.min_lookback..=pivot.max_lookback))
                    .changed()
                {
                    events.push(RulesEvent::PivotLeft(self.pivot_left));
                }
            });
            ui.horizontal(|ui| {
                ui.label(UI_TEXT.pivot_right_label);
                if ui
                    .add(DragValue::new(&mut self.pivot_right).range(pivot.min_lookback..=pivot.max_lookback))
                    .changed()
                {
                    events.push(RulesEvent::PivotRight(self.pivot_right));
                }
            });
        }

        ui.add_space(10.0);

        // System 3: Dashboard
        if ui
            .add(Checkbox::new(&mut self.show_dashboard, UI_TEXT.dashboard_label))
            .changed()
        {
            events.push(RulesEvent::ShowDashboard(self.show_dashboard));
        }
        if self.show_dashboard {
            ComboBox::from_label(UI_TEXT.htf_resolution_label)
                .selected_text(self.htf_resolution.to_string())
                .show_ui(ui, |ui| {
                    for resolution in HtfResolution::iter() {
                        if ui
                            .selectable_value(
                                &mut self.htf_resolution,
                                resolution,
                                resolution.to_string(),
                            )
                            .changed()
                        {
                            events.push(RulesEvent::HtfResolution(resolution));
                        }
                    }
                });
        }

        ui.add_space(20.0);
        events
    }
}
