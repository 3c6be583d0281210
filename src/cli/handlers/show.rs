//! Show command handler
//!
//! Prints the resolved configuration as JSON, in the same shape accepted
//! as an override file.

use std::io::Write;

use crate::config::GlobalConfig;
use crate::error::{AppError, AppResult};

/// Handler for the show command
pub struct ShowCommandHandler {
    config: GlobalConfig,
}

impl ShowCommandHandler {
    pub fn new(config: GlobalConfig) -> Self {
        Self { config }
    }

    /// Write the configuration as JSON, pretty-printed unless `compact`
    pub fn execute<W: Write>(&self, out: &mut W, compact: bool) -> AppResult<()> {
        let rendered = if compact {
            serde_json::to_string(&self.config)?
        } else {
            serde_json::to_string_pretty(&self.config)?
        };
        writeln!(out, "{rendered}").map_err(|e| AppError::io("<stdout>", e))
    }
}
