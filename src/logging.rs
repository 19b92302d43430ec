//! Tracing setup
//!
//! The TUI owns the terminal, so interactive mode writes to a log file
//! through a non-blocking appender. CLI mode writes to stderr.

use anyhow::Result;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Env var read before RUST_LOG
pub const LOG_ENV_VAR: &str = "MOVIEHUB_LOG";

/// Log file name inside the log directory
pub const LOG_FILE_NAME: &str = "moviehub.log";

fn env_filter(default_directive: &str) -> EnvFilter {
    std::env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|s| EnvFilter::try_new(s).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive))
}

/// Log to `<dir>/moviehub.log`. Keep the guard alive for the whole run.
pub fn init_file(dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(guard)
}

/// Log to stderr (quiet by default)
pub fn init_stderr() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))
}
