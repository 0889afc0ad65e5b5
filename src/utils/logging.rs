// src/utils/logging.rs
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::utils::{
    config::LoggingConfig,
    error::{Result, ServiceError},
};

/// Installs the global subscriber. `RUST_LOG` wins over the configured level.
///
/// When a log directory is configured, output goes to a daily rolling file and
/// the returned guard must be held until shutdown to flush it.
pub fn init(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| ServiceError::Config(format!("Invalid log filter: {}", e)))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_level(true)
        .with_file(true)
        .with_line_number(true);

    match &config.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, &config.file_prefix);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            builder
                .with_ansi(false)
                .with_writer(writer)
                .try_init()
                .map_err(|e| ServiceError::Init(format!("Failed to install logger: {}", e)))?;
            Ok(Some(guard))
        }
        None => {
            builder
                .try_init()
                .map_err(|e| ServiceError::Init(format!("Failed to install logger: {}", e)))?;
            Ok(None)
        }
    }
}
