//! Logger Module
//!
//! Console logging based on `tracing-subscriber`. Output goes to stderr so
//! commands that print configuration on stdout stay machine-readable.
//! Supports Full, Compact and JSON formats; `RUST_LOG` takes precedence over
//! the configured level when set.

pub mod config;
pub mod error;

// Re-export main types
pub use config::*;
pub use error::LoggerError;

use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global logger with the given configuration
pub fn init_logger(config: LoggerConfig) -> anyhow::Result<()> {
    config
        .validate()
        .map_err(|e| LoggerError::config(format!("{e:#}")))?;

    let filter = build_filter(&config);
    let use_ansi = config.colored && std::io::stderr().is_terminal();

    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.format {
        LogFormat::Full => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(use_ansi)
                    .with_target(true)
                    .with_level(true),
            )
            .try_init(),
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(use_ansi)
                    .with_target(true)
                    .compact(),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .json(),
            )
            .try_init(),
    };

    result.map_err(|e| LoggerError::already_initialized(e.to_string()))?;
    Ok(())
}

/// Build the level filter, preferring `RUST_LOG` when it is set and valid
///
/// `config.level` must already be validated.
fn build_filter(config: &LoggerConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.level.to_lowercase()))
}
