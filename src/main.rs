use money_map::{Cli, fetch_initial, run_app};

const APP_STATE_PATH: &str = "app_state.json";

fn main() -> eframe::Result {
    use clap::Parser;
    use eframe::NativeOptions;
    use std::path::PathBuf;
    use tokio::runtime::Runtime;

    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Initial Data Load (Blocking)
    let rt = Runtime::new().expect("Failed to create Tokio runtime");
    let initial = rt.block_on(fetch_initial(&args));
    let runtime = rt.handle().clone();

    // D. Run Native App
    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(APP_STATE_PATH)),
        ..Default::default()
    };

    eframe::run_native(
        "MACD Money Map",
        options,
        Box::new(move |cc| Ok(run_app(cc, runtime, initial))),
    )
}
