//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing.

use std::io::Write;

use tracing::debug;

use super::handlers::{
    CheckCommandHandler, InitCommandHandler, SchemaCommandHandler, ShowCommandHandler,
};
use super::parser::{Cli, Commands};
use crate::config::{ConfigLoader, GlobalConfig};
use crate::error::AppResult;

/// Execute a CLI command against the process environment, writing to stdout
pub fn execute_command(cli: &Cli) -> AppResult<()> {
    let stdout = std::io::stdout();
    execute_with(cli, ConfigLoader::new(), &mut stdout.lock())
}

/// Execute a CLI command with an explicit loader and output
///
/// The `--config` path, when given, is applied to `loader`. Commands that
/// do not need the configuration never load it.
pub fn execute_with<W: Write>(cli: &Cli, loader: ConfigLoader, out: &mut W) -> AppResult<()> {
    let command = cli.subcommand_or_default();
    debug!(?command, "Executing command");

    match command {
        Commands::Check => CheckCommandHandler::new(load(cli, loader)?).execute(out),
        Commands::Show { compact } => {
            ShowCommandHandler::new(load(cli, loader)?).execute(out, compact)
        }
        Commands::Schema => SchemaCommandHandler::execute(out),
        Commands::Init { output, force } => InitCommandHandler::new(output, force).execute(out),
    }
}

fn load(cli: &Cli, loader: ConfigLoader) -> AppResult<GlobalConfig> {
    let loader = match cli.config {
        Some(ref path) => loader.with_file(path),
        None => loader,
    };
    Ok(loader.load()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, EnvOverrides};
    use crate::error::AppError;
    use clap::Parser;
    use tempfile::TempDir;

    fn loader(vars: &[(&str, &str)]) -> ConfigLoader {
        ConfigLoader::with_env(vars.iter().copied().collect::<EnvOverrides>())
    }

    fn run(args: &[&str], vars: &[(&str, &str)]) -> (AppResult<()>, String) {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        let result = execute_with(&cli, loader(vars), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_execute_default_is_check() {
        let (result, out) = run(&["switch-config"], &[]);
        assert!(result.is_ok());
        assert!(out.contains("Configuration is valid"));
    }

    #[test]
    fn test_execute_show_applies_env() {
        let (result, out) = run(&["switch-config", "show", "--compact"], &[("CURRENCY", "KES")]);
        assert!(result.is_ok());
        let config: GlobalConfig = serde_json::from_str(&out).unwrap();
        assert_eq!(config.currency, "KES");
    }

    #[test]
    fn test_execute_check_with_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("switch.json5");
        std::fs::write(&path, "{ currency: 'ZMW' }").unwrap();

        let (result, out) = run(&["switch-config", "-c", path.to_str().unwrap(), "check"], &[]);
        assert!(result.is_ok());
        assert!(out.contains("Currency: ZMW"));
    }

    #[test]
    fn test_execute_check_reports_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.json5");

        let (result, _) = run(&["switch-config", "check", "-c", path.to_str().unwrap()], &[]);
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::FileNotFound(_)))
        ));
    }

    #[test]
    fn test_execute_check_reports_invalid_env() {
        let (result, _) = run(&["switch-config", "check"], &[("FSPIOP_URL", "not a url")]);
        match result {
            Err(AppError::Config(err)) => assert_eq!(err.field(), Some("urls.fspiop")),
            other => panic!("Expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_execute_schema_ignores_broken_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.json5");

        let (result, out) = run(&["switch-config", "-c", path.to_str().unwrap(), "schema"], &[]);
        assert!(result.is_ok());
        assert!(out.contains("applicationUrls.oracle"));
    }

    #[test]
    fn test_execute_init_then_check() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("switch.json5");
        let path = path.to_str().unwrap();

        let (result, _) = run(&["switch-config", "init", "--output", path], &[]);
        assert!(result.is_ok());

        let (result, out) = run(&["switch-config", "--config", path, "check"], &[]);
        assert!(result.is_ok());
        assert!(out.contains("Participants: 3"));
    }
}
