//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the settings store and the localizer.

use tracing::{info, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use crate::config::LoggingConfig;
use crate::utils::errors::{SiteError, Result};

/// Initialize logging based on configuration
///
/// When a log directory is configured the returned guard must be kept alive
/// for the file writer to flush.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| SiteError::Config(format!("Invalid log filter '{}': {}", config.level, e)))?;

    let stdout_layer = if config.json {
        tracing_subscriber::fmt::layer().json().with_writer(std::io::stdout).boxed()
    } else {
        tracing_subscriber::fmt::layer().with_writer(std::io::stdout).boxed()
    };

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, "studio-site.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| SiteError::Config(format!("Failed to install tracing subscriber: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log an applied settings change
pub fn log_setting_change(setting: &str, value: &str, subscribers: usize) {
    info!(
        setting = setting,
        value = value,
        subscribers = subscribers,
        "Setting updated"
    );
}

/// Log a setter call that was ignored because the value was invalid
pub fn log_rejected_setting(setting: &str, value: &str, reason: &str) {
    debug!(
        setting = setting,
        value = value,
        reason = reason,
        "Setting change ignored"
    );
}

/// Log a language switch
pub fn log_language_change(from: &str, to: &str, persisted: bool) {
    info!(
        from = from,
        to = to,
        persisted = persisted,
        "Language changed"
    );
}
