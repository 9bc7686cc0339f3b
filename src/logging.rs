//! Logging
//!
//! Installs the global `tracing` subscriber: console output plus an optional
//! daily rolling file.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::constants::LOG_FILE_PREFIX;
use crate::error::{Error, Result};

/// Build the filter. `RUST_LOG` wins over the configured level.
fn build_filter(level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level).map_err(|e| Error::Invalid {
        message: format!("Invalid log level '{level}': {e}"),
    })
}

/// Initialize logging.
///
/// Keep the returned guard alive for the life of the process, or buffered
/// file output is lost.
pub fn init(level: &str, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = build_filter(level)?;
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false));

    let Some(dir) = log_dir else {
        registry.try_init().map_err(|e| Error::Invalid {
            message: format!("Logging already initialized: {e}"),
        })?;
        return Ok(None);
    };

    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    registry
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .try_init()
        .map_err(|e| Error::Invalid {
            message: format!("Logging already initialized: {e}"),
        })?;

    Ok(Some(guard))
}
