//! Market data source configuration

/// Limits applied to every chart request
pub struct MarketLimits {
    pub request_timeout_secs: u64,
}

pub struct MarketConfig {
    // Base URL of the chart endpoint; the symbol is appended as a path segment
    pub chart_endpoint: &'static str,
    // The endpoint rejects requests with no User-Agent header
    pub user_agent: &'static str,
    // The HTF dashboard always looks at a fixed range of history
    pub htf_range: &'static str,
    pub default_symbol: &'static str,

    pub limits: MarketLimits,
}

pub const MARKET: MarketConfig = MarketConfig {
    chart_endpoint: "https://query1.finance.yahoo.com/v8/finance/chart",
    user_agent: "Mozilla/5.0 (X11; Linux x86_64) money-map/0.1",
    htf_range: "1y",
    default_symbol: "BTC-USD",

    limits: MarketLimits {
        request_timeout_secs: 15,
    },
};
