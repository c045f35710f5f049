// src/logging.rs

//! Logging setup for `dagstore` using `tracing` + `tracing-subscriber`.
//!
//! The library itself only emits `tracing` events. Applications that do not
//! install their own subscriber can call [`init_logging`] once at startup.
//!
//! Priority for determining the log level:
//! 1. explicit level (argument, or `[logging].level` via [`init_from_config`])
//! 2. `DAGSTORE_LOG` environment variable (e.g. "info", "debug")
//! 3. default to `info`
//!
//! Logs are sent to STDERR.

use anyhow::{Result, anyhow};
use tracing_subscriber::fmt;

use crate::config::{DagConfig, LogLevel};

/// Initialise the global logging subscriber.
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(level: Option<LogLevel>) -> Result<()> {
    let level = level
        .or_else(|| {
            std::env::var("DAGSTORE_LOG")
                .ok()
                .and_then(|s| s.parse::<LogLevel>().ok())
        })
        .unwrap_or(LogLevel::Info);

    fmt()
        .with_max_level(tracing::Level::from(level))
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(())
}

/// Initialise logging from the `[logging]` section of a validated config.
pub fn init_from_config(cfg: &DagConfig) -> Result<()> {
    init_logging(cfg.logging.level)
}
