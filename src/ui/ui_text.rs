/// Every user-facing string in one place.
pub struct UiText {
    // Sidebar headings
    pub data_settings_heading: &'static str,
    pub macd_settings_heading: &'static str,
    pub rules_heading: &'static str,

    // Data settings
    pub symbol_label: &'static str,
    pub symbol_hint: &'static str,
    pub timeframe_label: &'static str,
    pub period_label: &'static str,

    // MACD settings
    pub fast_label: &'static str,
    pub slow_label: &'static str,
    pub signal_label: &'static str,

    // Money map rules
    pub chop_threshold_label: &'static str,
    pub chop_threshold_helper: &'static str,
    pub divergence_label: &'static str,
    pub pivot_left_label: &'static str,
    pub pivot_right_label: &'static str,
    pub dashboard_label: &'static str,
    pub htf_resolution_label: &'static str,

    // Chart legend entries
    pub price_legend: &'static str,
    pub histogram_legend: &'static str,
    pub macd_chop_legend: &'static str,
    pub macd_bull_legend: &'static str,
    pub macd_bear_legend: &'static str,
    pub signal_legend: &'static str,
    pub chop_zone_legend: &'static str,
    pub zero_line_legend: &'static str,
    pub bull_div_legend: &'static str,
    pub bear_div_legend: &'static str,

    // HTF dashboard
    pub htf_heading: &'static str,
    pub htf_timeframe_metric: &'static str,
    pub htf_trend_metric: &'static str,
    pub htf_waiting: &'static str,

    // Status / errors
    pub loading_text: &'static str,
    pub retry_button: &'static str,
    pub error_hint: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    data_settings_heading: "Data Settings",
    macd_settings_heading: "MACD Settings",
    rules_heading: "Money Map Rules",

    symbol_label: "Symbol",
    symbol_hint: "e.g. BTC-USD, AAPL",
    timeframe_label: "Timeframe",
    period_label: "Data Period",

    fast_label: "Fast Length",
    slow_label: "Slow Length",
    signal_label: "Signal Smoothing",

    chop_threshold_label: "Distance Threshold (Chop Zone)",
    chop_threshold_helper: "Distance from the zero line below which the oscillator is treated as directionless.",
    divergence_label: "Show Divergence",
    pivot_left_label: "Pivot Lookback Left",
    pivot_right_label: "Pivot Lookback Right",
    dashboard_label: "Show HTF Dashboard",
    htf_resolution_label: "Higher Timeframe",

    price_legend: "Price",
    histogram_legend: "Histogram",
    macd_chop_legend: "MACD (Chop)",
    macd_bull_legend: "MACD (Bull)",
    macd_bear_legend: "MACD (Bear)",
    signal_legend: "Signal",
    chop_zone_legend: "Chop Zone",
    zero_line_legend: "Zero",
    bull_div_legend: "Bull Div",
    bear_div_legend: "Bear Div",

    htf_heading: "Higher Timeframe Dashboard",
    htf_timeframe_metric: "HTF Timeframe",
    htf_trend_metric: "Current Trend",
    htf_waiting: "fetching HTF data…",

    loading_text: "Fetching market data…",
    retry_button: "Retry",
    error_hint: "Check the symbol and try again.",
};
