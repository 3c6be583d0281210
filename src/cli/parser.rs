//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::logger::LogFormat;

/// Default output path for `init`
pub const DEFAULT_INIT_OUTPUT: &str = "switch-config.json5";

/// Configuration loader for a Mojaloop-style switch environment
#[derive(Parser, Debug)]
#[command(name = "switch-config")]
#[command(about = "Load and validate switch environment configuration")]
#[command(long_about = "
switch-config resolves the configuration of a switch environment: service
endpoints, the switch currency and the participant directory. Values come from
schema defaults, then environment variables, then an optional JSON/JSON5
override file.

ENVIRONMENT:
    CURRENCY, FSPIOP_URL, ALS_ADMIN_URL, CENTRAL_LEDGER_ADMIN_URL, ORACLE_URL

EXAMPLES:
    # Validate the defaults plus environment overrides
    switch-config check

    # Validate an override file
    switch-config --config config/switch.json5 check

    # Print the resolved configuration as JSON
    switch-config --config config/switch.json5 show

    # List declared keys, environment variables and defaults
    switch-config schema

    # Write a demo participant directory to start from
    switch-config init --output config/switch.json5
")]
#[command(version = crate::clap_long_version())]
pub struct Cli {
    /// Subcommand to execute (defaults to `check`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Override file path
    ///
    /// A JSON or JSON5 file merged over defaults and environment values.
    /// Keys that are not part of the schema are rejected.
    ///
    /// Example: --config /etc/switch/switch.json5
    #[arg(
        short,
        long,
        global = true,
        value_name = "FILE",
        env = "SWITCH_CONFIG_FILE",
        value_parser = super::validation::validate_config_file_path
    )]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    ///
    /// Cannot be used with --quiet.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error log output
    ///
    /// Cannot be used with --verbose.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log line format
    #[arg(long, global = true, value_enum, default_value_t = LogFormatArg::Full)]
    pub log_format: LogFormatArg,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Load and validate the configuration (default)
    ///
    /// Exits with a non-zero status and a descriptive message if the
    /// configuration cannot be loaded or is invalid.
    Check,

    /// Print the resolved configuration as JSON on stdout
    Show {
        /// Print on a single line instead of pretty-printing
        #[arg(long)]
        compact: bool,
    },

    /// List declared keys, their environment variables and defaults
    Schema,

    /// Write the demo participant directory as an override file
    ///
    /// The generated file is demo data: replace the participants before
    /// using it for anything else.
    ///
    /// Examples:
    ///   switch-config init                          # Writes ./switch-config.json5
    ///   switch-config init -o config/switch.json5   # Custom location
    Init {
        /// Output file (.json or .json5)
        #[arg(
            short,
            long,
            value_name = "FILE",
            default_value = DEFAULT_INIT_OUTPUT,
            value_parser = super::validation::validate_output_path
        )]
        output: PathBuf,

        /// Overwrite the output file if it already exists
        #[arg(long)]
        force: bool,
    },
}

/// Log format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormatArg {
    #[value(name = "full")]
    Full,
    #[value(name = "compact")]
    Compact,
    #[value(name = "json")]
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Full => LogFormat::Full,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

impl Cli {
    /// Log level implied by --verbose/--quiet
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        }
    }

    /// Subcommand to run, `check` when none was given
    pub fn subcommand_or_default(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Check)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_flag() {
        let result = Cli::try_parse_from(["switch-config", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_flag() {
        let result = Cli::try_parse_from(["switch-config", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_default_behavior() {
        let cli = Cli::try_parse_from(["switch-config"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.subcommand_or_default(), Commands::Check);
        assert!(!cli.verbose);
        assert!(!cli.quiet);
        assert_eq!(cli.log_level(), "info");
        assert_eq!(cli.log_format, LogFormatArg::Full);
    }

    #[test]
    fn test_config_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["switch-config", "show", "--config", "switch.json5"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("switch.json5")));
        assert_eq!(cli.subcommand_or_default(), Commands::Show { compact: false });
    }

    #[test]
    fn test_config_flag_rejects_wrong_extension() {
        let result = Cli::try_parse_from(["switch-config", "-c", "switch.toml", "check"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_init_command_defaults() {
        let cli = Cli::try_parse_from(["switch-config", "init"]).unwrap();
        assert_eq!(
            cli.subcommand_or_default(),
            Commands::Init {
                output: PathBuf::from(DEFAULT_INIT_OUTPUT),
                force: false,
            }
        );
    }

    #[test]
    fn test_verbose_and_quiet_levels() {
        let cli = Cli::try_parse_from(["switch-config", "--verbose"]).unwrap();
        assert_eq!(cli.log_level(), "debug");

        let cli = Cli::try_parse_from(["switch-config", "schema", "-q"]).unwrap();
        assert_eq!(cli.log_level(), "error");
    }

    #[test]
    fn test_conflicting_verbose_quiet() {
        let result = Cli::try_parse_from(["switch-config", "--verbose", "--quiet"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_log_format_conversion() {
        let cli = Cli::try_parse_from(["switch-config", "--log-format", "json"]).unwrap();
        assert_eq!(LogFormat::from(cli.log_format), LogFormat::Json);
    }
}
