//! Logging bootstrap.
//!
//! # Invariants
//! - The logger is started at most once per process; later calls are no-ops.
//! - `RUST_LOG`, when set, takes precedence over the configured level.

use anyhow::{Context, Result};
use flexi_logger::{Logger, LoggerHandle};
use log::info;
use once_cell::sync::OnceCell;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Starts a stderr logger with `level` as the default log spec.
///
/// # Errors
/// - Returns an error when `level` is not a valid log spec.
/// - Returns an error when the logger backend cannot start (for example
///   because another logger is already installed).
pub fn init_logging(level: &str) -> Result<()> {
    LOGGER.get_or_try_init(|| -> Result<LoggerHandle> {
        let handle = Logger::try_with_env_or_str(level)
            .with_context(|| format!("invalid log level `{level}`"))?
            .log_to_stderr()
            .format(flexi_logger::default_format)
            .start()
            .context("failed to start logger")?;

        info!(
            "event=app_start module=logging platform={} version={}",
            std::env::consts::OS,
            env!("CARGO_PKG_VERSION")
        );

        Ok(handle)
    })?;

    Ok(())
}
