//! File-based tracing setup.
//!
//! The terminal belongs to the UI while the browser runs, so log output goes
//! to `<log_dir>/algoq-reports.log` through a non-blocking writer.

use std::fs;
use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Log file name inside the log directory.
pub const LOG_FILE: &str = "algoq-reports.log";
const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber writing to `log_dir`.
///
/// The returned guard flushes buffered records on drop and must be held for
/// the whole run.
///
/// # Errors
/// Returns an error when the log directory cannot be created or a global
/// subscriber is already installed.
pub fn init(log_dir: &Path) -> io::Result<WorkerGuard> {
    fs::create_dir_all(log_dir)?;
    let file_appender = rolling::never(log_dir, LOG_FILE);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .try_init()
        .map_err(io::Error::other)?;

    Ok(guard)
}

/// Reads `RUST_LOG`, falling back to `info`.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
