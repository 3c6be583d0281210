//! CLI module for switch-config
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing with clap
//! - Argument validation
//! - Command execution and handlers for check, show, schema and init

pub mod executor;
pub mod handlers;
pub mod parser;
pub mod validation;

// Re-export public types for convenience
pub use executor::{execute_command, execute_with};
pub use parser::{Cli, Commands, LogFormatArg};

use crate::logger::{LoggerConfig, init_logger};

/// Logger configuration implied by the global CLI flags
pub fn logger_config(cli: &Cli) -> LoggerConfig {
    LoggerConfig {
        level: cli.log_level().to_string(),
        format: cli.log_format.into(),
        colored: true,
    }
}

/// Initialize logger from CLI flags
///
/// # Errors
/// Returns error if logger initialization fails
pub fn init_logger_from_cli(cli: &Cli) -> anyhow::Result<()> {
    init_logger(logger_config(cli))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::LogFormat;
    use clap::Parser;

    #[test]
    fn test_logger_config_from_flags() {
        let cli = Cli::try_parse_from(["switch-config", "-q", "--log-format", "compact"]).unwrap();
        let config = logger_config(&cli);
        assert_eq!(config.level, "error");
        assert_eq!(config.format, LogFormat::Compact);
        assert!(config.validate().is_ok());
    }
}
