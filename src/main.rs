//! Pharma Desk - Main Entry Point
//!
//! Pharmacy admin desktop: inventory, orders, customers, purchases and distributors tables.

use anyhow::Context;
use pharma_desk::app::application::run_app;
use pharma_desk::config::{get_settings_path, Settings};
use pharma_desk::helpers::get_or_create_data_dir;

fn main() -> anyhow::Result<()> {
    // Logging is configured by the settings, so load them quietly and report after init
    let path = get_settings_path();
    let (settings, load_error) = match &path {
        Ok(path) => Settings::load_or_default(path),
        Err(_) => (Settings::default(), None),
    };

    let log_dir = if settings.logging.file {
        Some(get_or_create_data_dir().context("Failed to create log directory")?)
    } else {
        None
    };
    // Flushes the file appender on drop
    let _guard = pharma_desk::logging::init(&settings.logging.level, log_dir.as_deref())
        .context("Failed to initialize logging")?;

    match (&path, load_error) {
        (Err(e), _) => tracing::warn!(error = %e, "No settings directory, using defaults"),
        (Ok(path), Some(e)) => {
            tracing::warn!(error = %e, path = ?path, "Failed to load settings, using defaults")
        }
        (Ok(path), None) => tracing::info!(path = ?path, "Settings loaded"),
    }
    tracing::info!("Starting Pharma Desk...");

    run_app(settings);
    Ok(())
}
