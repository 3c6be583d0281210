//! Init command handler
//!
//! Writes the demo participant directory as an override file.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::{ConfigLoader, EnvOverrides};
use crate::error::{AppError, AppResult};
use crate::fixtures::demo_config;

const JSON5_HEADER: &str = "\
// Demo switch environment generated by `switch-config init`.
// The participants and parties below are sample data: replace them.
";

/// Handler for the init command
pub struct InitCommandHandler {
    output: PathBuf,
    force: bool,
}

impl InitCommandHandler {
    pub fn new(output: PathBuf, force: bool) -> Self {
        Self { output, force }
    }

    /// Write the demo configuration and load it back to prove it is valid
    ///
    /// # Errors
    /// - The output exists and `force` was not given
    /// - Writing the file fails
    pub fn execute<W: Write>(&self, out: &mut W) -> AppResult<()> {
        if self.output.exists() && !self.force {
            return Err(AppError::Validation {
                field: "output".to_string(),
                reason: format!(
                    "{} already exists; pass --force to overwrite it",
                    self.output.display()
                ),
            });
        }

        let config = demo_config();
        let mut body = serde_json::to_string_pretty(&config)?;
        body.push('\n');
        if !Self::is_strict_json(&self.output) {
            body.insert_str(0, JSON5_HEADER);
        }

        std::fs::write(&self.output, body).map_err(|e| AppError::io(&self.output, e))?;

        let loaded = ConfigLoader::with_env(EnvOverrides::default())
            .with_file(&self.output)
            .load()?;
        info!(path = %self.output.display(), participants = loaded.participants.len(), "Wrote demo configuration");

        writeln!(
            out,
            "✓ Wrote demo configuration with {} participants to {}",
            loaded.participants.len(),
            self.output.display()
        )
        .map_err(|e| AppError::io("<stdout>", e))
    }

    fn is_strict_json(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    }
}
