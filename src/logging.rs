use std::fs;
use std::io;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

const LOG_FILE: &str = "scholars-table.log";

/// Install the global subscriber writing to a daily rolling file.
///
/// The terminal belongs to the TUI, so there is no console layer. `RUST_LOG`
/// overrides the configured level. Keep the returned guard alive until exit or
/// buffered lines are lost.
pub fn init(config: &LoggingConfig) -> io::Result<WorkerGuard> {
    fs::create_dir_all(&config.directory)?;

    let default_filter = format!("{},scholars_table=debug", config.level);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let file_appender = tracing_appender::rolling::daily(&config.directory, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_writer(non_blocking_file);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .map_err(io::Error::other)?;

    tracing::info!(
        directory = %config.directory.display(),
        file = LOG_FILE,
        "logging initialized"
    );

    Ok(guard)
}
