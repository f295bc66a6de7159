#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod indicators;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use analysis::{DerivedSeries, HtfBias, IndicatorParams, compute_derived};
pub use data::{InitialData, fetch_initial};
pub use domain::{Candle, HistoryPeriod, HtfResolution, Timeframe};
pub use models::OhlcvTimeSeries;
pub use ui::MoneyMapApp;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Ticker symbol to load at startup (e.g. BTC-USD, AAPL)
    #[arg(long)]
    pub symbol: Option<String>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    runtime: tokio::runtime::Handle,
    initial: InitialData,
) -> Box<dyn eframe::App> {
    let app = ui::MoneyMapApp::new(cc, runtime, initial);
    Box::new(app)
}
