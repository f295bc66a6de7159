use eframe::{Frame, egui};
use poll_promise::Promise;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::analysis::{DerivedSeries, HtfBias, IndicatorParams, compute_derived, htf_bias};
use crate::config::MARKET;
use crate::data::source::InitialData;
use crate::domain::{HistoryPeriod, HtfResolution, Timeframe};
use crate::models::OhlcvTimeSeries;
use crate::ui::app_async::FetchOutcome;
use crate::ui::utils::setup_custom_visuals;

/// Error types for application operations
#[derive(Debug, Clone)]
pub enum AppError {
    /// No data is available for the operation
    DataNotAvailable,
    /// The data source refused or failed the request
    FetchFailed(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DataNotAvailable => write!(f, "No data available"),
            AppError::FetchFailed(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Everything produced by the current run: the fetched bars and the series
/// derived from them. Replaced wholesale whenever an input changes.
#[derive(Default)]
pub struct DataState {
    pub series: Option<OhlcvTimeSeries>,
    pub derived: Option<DerivedSeries>,
    pub htf_series: Option<OhlcvTimeSeries>,
    pub htf_bias: Option<HtfBias>,
    pub last_error: Option<AppError>,
}

/// Parameters of one primary-series fetch. Change detection against the last
/// requested set drives refetches; no caching happens beyond that.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchParams {
    pub symbol: String,
    pub timeframe: Timeframe,
    pub period: HistoryPeriod,
}

/// Parameters of one HTF fetch (the range is fixed by config).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HtfParams {
    pub symbol: String,
    pub resolution: HtfResolution,
}

#[derive(Deserialize, Serialize)]
pub struct MoneyMapApp {
    // UI state (settings persist across runs; data never does)
    #[serde(skip, default = "default_symbol")]
    pub(super) symbol: String,
    #[serde(skip, default = "default_symbol")]
    pub(super) symbol_draft: String,
    #[serde(default)]
    pub(super) timeframe: Timeframe,
    #[serde(default)]
    pub(super) period: HistoryPeriod,
    #[serde(default)]
    pub(super) indicator_params: IndicatorParams,
    #[serde(default = "default_show_dashboard")]
    pub(super) show_dashboard: bool,
    #[serde(default)]
    pub(super) htf_resolution: HtfResolution,

    // Data state - skip serialization since it contains runtime-only data
    #[serde(skip)]
    pub(super) data_state: DataState,

    // In-flight background fetches
    #[serde(skip)]
    pub(super) fetch_promise: Option<Promise<FetchOutcome>>,
    #[serde(skip)]
    pub(super) htf_promise: Option<Promise<FetchOutcome>>,

    // Last requested/accepted inputs, to detect real changes
    #[serde(skip)]
    pub(super) last_fetch_params: Option<FetchParams>,
    #[serde(skip)]
    pub(super) last_htf_params: Option<HtfParams>,
    #[serde(skip)]
    pub(super) last_indicator_params: Option<IndicatorParams>,
    #[serde(skip)]
    pub(super) last_htf_bias_params: Option<IndicatorParams>,

    // Handle of the runtime created in main; fetches block on it
    #[serde(skip)]
    pub(super) runtime: Option<tokio::runtime::Handle>,
}

fn default_symbol() -> String {
    MARKET.default_symbol.to_string()
}

fn default_show_dashboard() -> bool {
    true
}

impl MoneyMapApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        runtime: tokio::runtime::Handle,
        initial: InitialData,
    ) -> Self {
        let mut app: MoneyMapApp;

        // Attempt to load the persisted settings
        if let Some(storage) = cc.storage {
            if let Some(value) = eframe::get_value(storage, eframe::APP_KEY) {
                #[cfg(debug_assertions)]
                log::info!("Successfully loaded persisted settings");
                app = value;
            } else {
                app = MoneyMapApp::new_with_initial_state();
            }
        } else {
            app = MoneyMapApp::new_with_initial_state();
        }

        app.runtime = Some(runtime);

        // Seed with the series fetched before the GUI started. The prefetch
        // ran with default timeframe/period; if the persisted settings differ
        // the first update() notices the mismatch and refetches.
        app.symbol = initial.symbol.clone();
        app.symbol_draft = initial.symbol.clone();
        app.last_fetch_params = Some(FetchParams {
            symbol: initial.symbol.clone(),
            timeframe: Timeframe::default(),
            period: HistoryPeriod::default(),
        });
        app.last_htf_params = Some(HtfParams {
            symbol: initial.symbol,
            resolution: HtfResolution::default(),
        });

        match initial.primary {
            Ok(series) => {
                log::info!("Loaded {} bars for {}", series.bars(), series.symbol);
                app.data_state.series = Some(series);
            }
            Err(error) => {
                app.data_state.last_error = Some(AppError::FetchFailed(format!("{error:#}")));
            }
        }
        match initial.higher_timeframe {
            Ok(series) => app.data_state.htf_series = Some(series),
            Err(error) => {
                app.data_state.htf_bias = Some(HtfBias::Unavailable(format!("{error:#}")));
            }
        }

        app
    }

    pub fn new_with_initial_state() -> Self {
        MoneyMapApp {
            symbol: default_symbol(),
            symbol_draft: default_symbol(),
            timeframe: Timeframe::default(),
            period: HistoryPeriod::default(),
            indicator_params: IndicatorParams::default(),
            show_dashboard: default_show_dashboard(),
            htf_resolution: HtfResolution::default(),
            data_state: DataState::default(),
            fetch_promise: None,
            htf_promise: None,
            last_fetch_params: None,
            last_htf_params: None,
            last_indicator_params: None,
            last_htf_bias_params: None,
            runtime: None,
        }
    }

    pub(super) fn fetch_params(&self) -> FetchParams {
        FetchParams {
            symbol: self.symbol.clone(),
            timeframe: self.timeframe,
            period: self.period,
        }
    }

    pub(super) fn htf_params(&self) -> HtfParams {
        HtfParams {
            symbol: self.symbol.clone(),
            resolution: self.htf_resolution,
        }
    }

    pub(super) fn is_fetching(&self) -> bool {
        self.fetch_promise.is_some()
    }

    /// Spawn fetches whenever the data-acquisition controls no longer match
    /// the last requested parameters. Failed requests are not retried until
    /// an input changes (or the user hits Retry, which clears the marker).
    fn ensure_market_data(&mut self) {
        if self.symbol.trim().is_empty() {
            return;
        }

        let desired = self.fetch_params();
        if self.fetch_promise.is_none() && self.last_fetch_params.as_ref() != Some(&desired) {
            self.start_primary_fetch(desired);
        }

        if self.show_dashboard {
            let desired_htf = self.htf_params();
            if self.htf_promise.is_none() && self.last_htf_params.as_ref() != Some(&desired_htf) {
                self.start_htf_fetch(desired_htf);
            }
        }
    }

    /// Recompute the derived series when the bars or the indicator params
    /// changed. The computation is pure, so equality of inputs is all the
    /// change detection we need.
    fn ensure_derived(&mut self) {
        let Some(series) = &self.data_state.series else {
            return;
        };

        let params = self.indicator_params.clone();
        let stale = self.data_state.derived.is_none()
            || self.last_indicator_params.as_ref() != Some(&params);
        if stale {
            self.data_state.derived = Some(compute_derived(series, &params));
            self.last_indicator_params = Some(params);
        }
    }

    /// Same idea for the HTF bias, which shares the MACD parameters with the
    /// primary chart but runs on its own series.
    fn ensure_htf_bias(&mut self) {
        if !self.show_dashboard {
            return;
        }
        let Some(series) = &self.data_state.htf_series else {
            return;
        };

        let params = self.indicator_params.clone();
        let stale = self.data_state.htf_bias.is_none()
            || self.last_htf_bias_params.as_ref() != Some(&params);
        if stale {
            self.data_state.htf_bias = Some(htf_bias::classify(series, &params));
            self.last_htf_bias_params = Some(params);
        }
    }
}

impl eframe::App for MoneyMapApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        // Poll in-flight fetches, then close any gaps they left behind
        self.poll_fetches(ctx);
        self.ensure_market_data();
        self.ensure_derived();
        self.ensure_htf_bias();

        self.render_side_panel(ctx);
        self.render_dashboard_panel(ctx);
        self.render_central_panel(ctx);
    }
}
