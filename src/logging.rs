use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;
use crate::constants;
use crate::error::{CalcError, Result};

/// Initializes the logging system with console output on stderr and, when
/// enabled, a JSON file layer with daily rotation. Stdout stays reserved for
/// command results.
///
/// `RUST_LOG` takes precedence over the configured level. The returned guard
/// must be held for the life of the process so buffered file logs get flushed.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| CalcError::Logging(format!("invalid log level '{}': {}", config.level, e)))?;

    let (file_layer, guard) = if config.file {
        fs::create_dir_all(&config.dir)?;
        let file_appender = tracing_appender::rolling::daily(&config.dir, constants::LOG_FILE_NAME);
        let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);
        let layer = fmt::layer().json().with_writer(non_blocking_writer);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    let console_layer = fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(|e| CalcError::Logging(e.to_string()))?;

    Ok(guard)
}
