//! Caro GUI
//!
//! Hotseat locked-five Caro. An optional first argument names a JSON rule
//! config, e.g. `{ "board_size": 19, "explosion_win_threshold": 7 }`.
//! Set `RUST_LOG=caro=debug` to trace every move.

use caro::ui::CaroApp;
use caro::RuleConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("caro=info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => RuleConfig::load(path)?,
        None => RuleConfig::default(),
    };
    tracing::info!(?config, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Caro - Locked Five"),
        ..Default::default()
    };

    eframe::run_native(
        "Caro",
        options,
        Box::new(move |cc| Ok(Box::new(CaroApp::new(cc, config)?))),
    )?;
    Ok(())
}
