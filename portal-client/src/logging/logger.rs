//! Subscriber initialization
//!
//! The library only emits `tracing` events. Applications that have no
//! subscriber of their own can call [`init`] once at startup.

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::{LogConfig, DEFAULT_LOG_LEVEL, LOG_FILE_PREFIX};

/// Errors from [`init`].
#[derive(Debug, thiserror::Error)]
pub enum LogInitError {
    #[error("failed to create log directory: {0}")]
    LogDir(#[from] std::io::Error),

    #[error("a global subscriber is already installed: {0}")]
    AlreadySet(#[from] tracing_subscriber::util::TryInitError),
}

/// Install a global subscriber.
///
/// With `log_dir` set, writes to a daily-rotated file through a non-blocking
/// writer; otherwise writes to stderr. Keep the returned guard alive for as
/// long as logs should be flushed.
pub fn init(config: &LogConfig) -> Result<Option<WorkerGuard>, LogInitError> {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let guard = match &config.log_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;

            let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let file_layer = fmt::layer()
                .with_writer(non_blocking)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false); // No ANSI codes in log files

            tracing_subscriber::registry()
                .with(env_filter)
                .with(file_layer)
                .try_init()?;

            Some(guard)
        }
        None => {
            let stderr_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_ansi(config.ansi);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(stderr_layer)
                .try_init()?;

            None
        }
    };

    tracing::info!(
        log_level = %config.log_level,
        log_dir = ?config.log_dir,
        "Logging initialized"
    );

    Ok(guard)
}
