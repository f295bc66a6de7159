use eframe::egui;
use poll_promise::Promise;
use std::time::{Duration, Instant};

use crate::analysis::HtfBias;
use crate::data::source::{FetchRequest, MarketDataSource};
use crate::data::yahoo::YahooChartSource;
use crate::models::OhlcvTimeSeries;
use crate::ui::app::{AppError, FetchParams, HtfParams, MoneyMapApp};

/// Result of one background fetch, tagged with the request that produced it
/// so stale arrivals can be recognised and discarded.
pub struct FetchOutcome {
    pub(super) result: Result<OhlcvTimeSeries, AppError>,
    pub(super) request: FetchRequest,
    pub(super) elapsed: Duration,
}

impl MoneyMapApp {
    pub(super) fn start_primary_fetch(&mut self, params: FetchParams) {
        let request = FetchRequest::primary(&params.symbol, params.timeframe, params.period);
        self.last_fetch_params = Some(params);
        self.fetch_promise = Some(spawn_fetch(self.runtime.clone(), request));
    }

    pub(super) fn start_htf_fetch(&mut self, params: HtfParams) {
        let request = FetchRequest::higher_timeframe(&params.symbol, params.resolution);
        self.last_htf_params = Some(params);
        self.htf_promise = Some(spawn_fetch(self.runtime.clone(), request));
    }

    pub(super) fn poll_fetches(&mut self, ctx: &egui::Context) {
        if let Some(promise) = self.fetch_promise.take() {
            match promise.try_take() {
                Ok(outcome) => self.apply_primary_outcome(outcome),
                Err(pending) => {
                    self.fetch_promise = Some(pending);
                    ctx.request_repaint_after(Duration::from_millis(100));
                }
            }
        }

        if let Some(promise) = self.htf_promise.take() {
            match promise.try_take() {
                Ok(outcome) => self.apply_htf_outcome(outcome),
                Err(pending) => {
                    self.htf_promise = Some(pending);
                    ctx.request_repaint_after(Duration::from_millis(100));
                }
            }
        }
    }

    fn apply_primary_outcome(&mut self, outcome: FetchOutcome) {
        // Discard stale results: the controls changed while the fetch was in
        // flight, and ensure_market_data has already queued a fresh request.
        let desired = FetchRequest::primary(&self.symbol, self.timeframe, self.period);
        if outcome.request != desired {
            log::info!("Discarding stale fetch result for {}", outcome.request.symbol);
            return;
        }

        match outcome.result {
            Ok(series) => {
                log::info!(
                    "Loaded {} bars for {} in {:.2}s",
                    series.bars(),
                    series.symbol,
                    outcome.elapsed.as_secs_f32(),
                );
                self.data_state.series = Some(series);
                self.data_state.derived = None; // rebuilt by ensure_derived
                self.data_state.last_error = None;
            }
            Err(error) => {
                log::error!("Fetch failed: {}", error);
                self.data_state.series = None;
                self.data_state.derived = None;
                self.data_state.last_error = Some(error);
            }
        }
    }

    fn apply_htf_outcome(&mut self, outcome: FetchOutcome) {
        let desired = FetchRequest::higher_timeframe(&self.symbol, self.htf_resolution);
        if outcome.request != desired {
            return;
        }

        match outcome.result {
            Ok(series) => {
                self.data_state.htf_series = Some(series);
                self.data_state.htf_bias = None; // rebuilt by ensure_htf_bias
            }
            Err(error) => {
                // HTF failures stay inside the dashboard strip
                log::warn!("HTF fetch failed: {}", error);
                self.data_state.htf_series = None;
                self.data_state.htf_bias = Some(HtfBias::Unavailable(error.to_string()));
            }
        }
    }
}

fn spawn_fetch(
    runtime: Option<tokio::runtime::Handle>,
    request: FetchRequest,
) -> Promise<FetchOutcome> {
    Promise::spawn_thread("market_fetch", move || {
        let started = Instant::now();
        let result = match runtime {
            Some(handle) => handle
                .block_on(async { YahooChartSource::new().fetch_series(&request).await })
                .map_err(|error| AppError::FetchFailed(format!("{error:#}"))),
            None => Err(AppError::DataNotAvailable),
        };

        FetchOutcome {
            result,
            request,
            elapsed: started.elapsed(),
        }
    })
}
