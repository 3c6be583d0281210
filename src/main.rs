use clap::Parser;

use switch_config::cli::{Cli, execute_command, init_logger_from_cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger_from_cli(&cli)?;

    tracing::debug!(version = switch_config::pkg_version(), "Starting switch-config");

    // Any error aborts with a non-zero exit; partial configuration is never used
    execute_command(&cli)?;
    Ok(())
}
