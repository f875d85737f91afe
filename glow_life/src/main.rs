// main.rs - Glowing Conway's Game of Life on a wrap-around grid
// Loads config, sets up logging, and hands the window to the app

use std::path::PathBuf;

use eframe::egui;
use glow_life_core::LifeConfig;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod app;   // eframe::App: resize, input, paint

use app::GlowLifeApp;

const CONFIG_ENV: &str = "GLOW_LIFE_CONFIG";

fn main() -> Result<(), eframe::Error> {
    let (config, load_error) = match std::env::var_os(CONFIG_ENV).map(PathBuf::from) {
        Some(path) => match LifeConfig::from_file(&path) {
            Ok(config) => (config, None),
            Err(err) => (env_defaults(), Some((path, err))),
        },
        None => (env_defaults(), None),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_target(true)
        .init();

    if let Some((path, err)) = load_error {
        warn!(path = %path.display(), error = %err, "could not load config, using defaults");
    }

    let config = config.sanitized();
    info!(
        cell_size = config.cell_size,
        step_interval_ms = config.step_interval_ms,
        seeded = config.seed.is_some(),
        "glow_life starting"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height]),
        ..Default::default()
    };

    eframe::run_native(
        "Glow Life",
        options,
        Box::new(move |_cc| Box::new(GlowLifeApp::new(&config))),
    )
}

fn env_defaults() -> LifeConfig {
    let mut config = LifeConfig::default();
    config.apply_env_overrides();
    config
}
