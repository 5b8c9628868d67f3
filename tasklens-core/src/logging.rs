//! Logging infrastructure for tasklens
//!
//! Diagnostics go to a daily rolling file under `$XDG_STATE_HOME/tasklens/`
//! (`~/.local/state/tasklens/tasklens.log.YYYY-MM-DD`). Stdout stays reserved
//! for report output, so nothing is logged to the terminal.

use crate::config::{Config, LoggingConfig};
use crate::error::{Error, Result};
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

const LOG_FILE_PREFIX: &str = "tasklens.log";
const FALLBACK_LEVEL: &str = "info";

/// Initialize the logging system
///
/// `RUST_LOG` takes precedence over the configured level. An unparseable
/// configured level falls back to `info` and is reported once logging is up.
pub fn init(config: &LoggingConfig) -> Result<LoggingGuard> {
    let log_dir = Config::state_dir();
    let appender = file_appender(&log_dir, config.max_files)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    let (filter, rejected_level) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, false),
        Err(_) => configured_filter(&config.level),
    };

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    if rejected_level {
        tracing::warn!(level = %config.level, "Invalid log level in config, using info");
    }
    tracing::debug!(
        log_dir = %log_dir.display(),
        max_files = config.max_files,
        "Logging initialized"
    );

    Ok(LoggingGuard { _guard: guard })
}

/// Daily rolling appender in `dir`, keeping at most `max_files` files.
fn file_appender(dir: &Path, max_files: usize) -> Result<RollingFileAppender> {
    std::fs::create_dir_all(dir)?;
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .max_log_files(max_files.max(1))
        .build(dir)
        .map_err(|e| Error::Config(format!("failed to create log file: {}", e)))
}

/// Filter for the configured level; the flag is set when it was rejected.
fn configured_filter(level: &str) -> (EnvFilter, bool) {
    match EnvFilter::try_new(level) {
        Ok(filter) => (filter, false),
        Err(_) => (EnvFilter::new(FALLBACK_LEVEL), true),
    }
}

/// Initialize logging for tests (logs to the test writer)
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .with_span_events(FmtSpan::CLOSE)
        .try_init();
}

/// Keeps the background log writer alive; pending lines flush on drop.
pub struct LoggingGuard {
    _guard: tracing_appender::non_blocking::WorkerGuard,
}
