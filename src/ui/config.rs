use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub bias_bull: Color32,
    pub bias_bear: Color32,
    pub bias_error: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,                          // This sets every label globally
        heading: Color32::from_rgb(255, 215, 0),       // Gold headings
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(16, 16, 20),  // Dark chart backdrop
        side_panel: Color32::from_rgb(25, 25, 25),
        bias_bull: Color32::from_rgb(130, 200, 140),
        bias_bear: Color32::from_rgb(220, 120, 120),
        bias_error: Color32::from_rgb(200, 200, 160),
    },
};
