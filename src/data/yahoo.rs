//! Yahoo Finance v8 chart endpoint client.

use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use async_trait::async_trait;
use serde::Deserialize;

use crate::config::MARKET;
use crate::data::source::{FetchRequest, MarketDataSource};
use crate::models::OhlcvTimeSeries;
use crate::utils::TimeUtils;

pub struct YahooChartSource {
    client: reqwest::Client,
}

impl YahooChartSource {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(MARKET.user_agent)
            .timeout(Duration::from_secs(MARKET.limits.request_timeout_secs))
            .build()
            .expect("Failed to build HTTP client");
        YahooChartSource { client }
    }

    fn chart_url(&self, request: &FetchRequest) -> String {
        format!(
            "{}/{}?range={}&interval={}",
            MARKET.chart_endpoint, request.symbol, request.range_code, request.interval_code,
        )
    }
}

impl Default for YahooChartSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketDataSource for YahooChartSource {
    fn signature(&self) -> &'static str {
        "Yahoo chart API"
    }

    async fn fetch_series(&self, request: &FetchRequest) -> Result<OhlcvTimeSeries> {
        let url = self.chart_url(request);
        log::info!(
            "Fetching {} ({} bars over {})",
            request.symbol,
            request.interval_code,
            request.range_code,
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("chart request failed for {}", request.symbol))?;

        let status = response.status();
        // The endpoint reports unknown symbols inside a 404 JSON body, so keep
        // the body around for the error path instead of bailing on status alone.
        let body = response
            .text()
            .await
            .context("reading chart response body")?;

        match parse_chart_response(&body, request) {
            Ok(series) => Ok(series),
            Err(e) if !status.is_success() => {
                Err(e.context(format!("chart request returned HTTP {}", status)))
            }
            Err(e) => Err(e),
        }
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Deserialize)]
struct ChartResponse {
    chart: ChartEnvelope,
}

#[derive(Deserialize)]
struct ChartEnvelope {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Deserialize)]
struct ChartError {
    code: String,
    description: Option<String>,
}

#[derive(Deserialize)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: ChartIndicators,
}

#[derive(Deserialize)]
struct ChartIndicators {
    quote: Vec<ChartQuote>,
}

#[derive(Deserialize, Default)]
struct ChartQuote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
}

/// Decode a chart payload into a bar series.
///
/// Bars with any missing OHLC component are dropped (the API pads halted
/// sessions with nulls). Timestamps arrive in epoch seconds and are stored
/// as milliseconds.
fn parse_chart_response(body: &str, request: &FetchRequest) -> Result<OhlcvTimeSeries> {
    let parsed: ChartResponse = serde_json::from_str(body).context("decoding chart JSON")?;

    if let Some(error) = parsed.chart.error {
        bail!(
            "chart API error for {}: {}",
            request.symbol,
            error.description.unwrap_or(error.code),
        );
    }

    let result = parsed
        .chart
        .result
        .and_then(|mut results| {
            if results.is_empty() {
                None
            } else {
                Some(results.remove(0))
            }
        })
        .ok_or_else(|| anyhow!("no data found for {}", request.symbol))?;

    let timestamps = result.timestamp.unwrap_or_default();
    let quote = result.indicators.quote.into_iter().next().unwrap_or_default();

    let mut timestamps_ms = Vec::with_capacity(timestamps.len());
    let mut open_prices = Vec::with_capacity(timestamps.len());
    let mut high_prices = Vec::with_capacity(timestamps.len());
    let mut low_prices = Vec::with_capacity(timestamps.len());
    let mut close_prices = Vec::with_capacity(timestamps.len());

    for (i, &ts_sec) in timestamps.iter().enumerate() {
        let (Some(open), Some(high), Some(low), Some(close)) = (
            quote.open.get(i).copied().flatten(),
            quote.high.get(i).copied().flatten(),
            quote.low.get(i).copied().flatten(),
            quote.close.get(i).copied().flatten(),
        ) else {
            continue; // padded/halted session
        };

        timestamps_ms.push(ts_sec * TimeUtils::MS_IN_S);
        open_prices.push(open);
        high_prices.push(high);
        low_prices.push(low);
        close_prices.push(close);
    }

    if timestamps_ms.is_empty() {
        bail!("no data found for {}. Please check the symbol.", request.symbol);
    }

    OhlcvTimeSeries::from_columns(
        request.symbol.clone(),
        request.interval_code.to_string(),
        timestamps_ms,
        open_prices,
        high_prices,
        low_prices,
        close_prices,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HistoryPeriod, Timeframe};

    fn request() -> FetchRequest {
        FetchRequest::primary("TEST", Timeframe::Daily, HistoryPeriod::OneYear)
    }

    #[test]
    fn parses_a_well_formed_payload() {
        let body = r#"{
            "chart": {
                "result": [{
                    "timestamp": [86400, 172800, 259200],
                    "indicators": { "quote": [{
                        "open":  [1.0, 2.0, 3.0],
                        "high":  [1.5, 2.5, 3.5],
                        "low":   [0.5, 1.5, 2.5],
                        "close": [1.2, 2.2, 3.2]
                    }]}
                }],
                "error": null
            }
        }"#;

        let series = parse_chart_response(body, &request()).unwrap();
        assert_eq!(series.bars(), 3);
        assert_eq!(series.timestamps_ms, vec![86_400_000, 172_800_000, 259_200_000]);
        assert_eq!(series.close_prices, vec![1.2, 2.2, 3.2]);
        assert_eq!(series.symbol, "TEST");
        assert_eq!(series.interval_code, "1d");
    }

    #[test]
    fn drops_bars_with_null_components() {
        let body = r#"{
            "chart": {
                "result": [{
                    "timestamp": [86400, 172800, 259200],
                    "indicators": { "quote": [{
                        "open":  [1.0, null, 3.0],
                        "high":  [1.5, 2.5, 3.5],
                        "low":   [0.5, 1.5, 2.5],
                        "close": [1.2, 2.2, 3.2]
                    }]}
                }],
                "error": null
            }
        }"#;

        let series = parse_chart_response(body, &request()).unwrap();
        assert_eq!(series.bars(), 2, "the padded middle bar must be dropped");
        assert_eq!(series.close_prices, vec![1.2, 3.2]);
    }

    #[test]
    fn surfaces_the_api_error_description() {
        let body = r#"{
            "chart": {
                "result": null,
                "error": { "code": "Not Found", "description": "No data found, symbol may be delisted" }
            }
        }"#;

        let error = parse_chart_response(body, &request()).unwrap_err();
        assert!(error.to_string().contains("symbol may be delisted"));
    }

    #[test]
    fn all_null_quotes_read_as_no_data() {
        let body = r#"{
            "chart": {
                "result": [{
                    "timestamp": [86400],
                    "indicators": { "quote": [{
                        "open": [null], "high": [null], "low": [null], "close": [null]
                    }]}
                }],
                "error": null
            }
        }"#;

        let error = parse_chart_response(body, &request()).unwrap_err();
        assert!(error.to_string().contains("no data found for TEST"));
    }

    #[test]
    fn missing_result_reads_as_no_data() {
        let body = r#"{ "chart": { "result": [], "error": null } }"#;
        assert!(parse_chart_response(body, &request()).is_err());
    }
}
