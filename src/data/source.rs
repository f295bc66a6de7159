use anyhow::Result;
use async_trait::async_trait;
use tokio::time::Instant;

use crate::Cli;
use crate::config::MARKET;
use crate::data::yahoo::YahooChartSource;
use crate::domain::{HistoryPeriod, HtfResolution, Timeframe};
use crate::models::OhlcvTimeSeries;

/// One chart request: everything the data source needs to produce a series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub symbol: String,
    pub interval_code: &'static str,
    pub range_code: &'static str,
}

impl FetchRequest {
    pub fn primary(symbol: &str, timeframe: Timeframe, period: HistoryPeriod) -> Self {
        FetchRequest {
            symbol: symbol.to_string(),
            interval_code: timeframe.api_code(),
            range_code: period.api_code(),
        }
    }

    /// Dashboard request: coarser resolution, fixed range of history.
    pub fn higher_timeframe(symbol: &str, resolution: HtfResolution) -> Self {
        FetchRequest {
            symbol: symbol.to_string(),
            interval_code: resolution.api_code(),
            range_code: MARKET.htf_range,
        }
    }
}

#[async_trait]
pub trait MarketDataSource {
    // Either produce a bar series for the request OR return an anyhow::Error
    async fn fetch_series(&self, request: &FetchRequest) -> Result<OhlcvTimeSeries>;

    /// A unique identifier for this implementation (so logs show which one ran).
    fn signature(&self) -> &'static str;
}

/// Series fetched before the GUI starts. The HTF result is carried as-is so
/// the dashboard can show a failure inline instead of aborting startup.
pub struct InitialData {
    pub symbol: String,
    pub primary: Result<OhlcvTimeSeries>,
    pub higher_timeframe: Result<OhlcvTimeSeries>,
}

// Async code to run in main before egui starts up
pub async fn fetch_initial(args: &Cli) -> InitialData {
    let symbol = args
        .symbol
        .clone()
        .unwrap_or_else(|| MARKET.default_symbol.to_string());
    let source = YahooChartSource::new();

    let primary_request =
        FetchRequest::primary(&symbol, Timeframe::default(), HistoryPeriod::default());
    let htf_request = FetchRequest::higher_timeframe(&symbol, HtfResolution::default());

    let start_time = Instant::now();
    let (primary, higher_timeframe) = futures::join!(
        source.fetch_series(&primary_request),
        source.fetch_series(&htf_request),
    );
    log::info!(
        "Initial load for {} via {} took {:?}",
        symbol,
        source.signature(),
        start_time.elapsed(),
    );
    if let Err(e) = &primary {
        log::error!("Initial fetch failed for {}: {:#}", symbol, e);
    }

    InitialData {
        symbol,
        primary,
        higher_timeframe,
    }
}
