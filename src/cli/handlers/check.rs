//! Check command handler
//!
//! Reports a summary of a loaded configuration.

use std::io::Write;

use crate::config::{GlobalConfig, ParticipantType};
use crate::error::{AppError, AppResult};

/// Handler for the check command
pub struct CheckCommandHandler {
    config: GlobalConfig,
}

impl CheckCommandHandler {
    /// Create a new check command handler
    pub fn new(config: GlobalConfig) -> Self {
        Self { config }
    }

    /// Validate the configuration and print a summary
    pub fn execute<W: Write>(&self, out: &mut W) -> AppResult<()> {
        self.config.validate()?;
        self.write_summary(out)
            .map_err(|e| AppError::io("<stdout>", e))
    }

    fn write_summary<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let config = &self.config;
        let parties: usize = config.participants.iter().map(|p| p.parties.len()).sum();

        writeln!(out, "✓ Configuration is valid")?;
        writeln!(out, "✓ Currency: {}", config.currency)?;
        writeln!(out, "✓ FSPIOP API: {}", config.urls.fspiop)?;
        writeln!(out, "✓ ALS admin API: {}", config.urls.als_admin)?;
        writeln!(out, "✓ Central-ledger admin API: {}", config.urls.central_ledger_admin)?;
        writeln!(out, "✓ Oracle simulator: {}", config.application_urls.oracle)?;
        writeln!(
            out,
            "✓ Participants: {} ({} DFSP, {} PISP) with {} parties",
            config.participants.len(),
            config.participants_of_type(ParticipantType::Dfsp).count(),
            config.participants_of_type(ParticipantType::Pisp).count(),
            parties
        )?;
        for participant in &config.participants {
            writeln!(
                out,
                "  - {} [{}] callbacks at {}",
                participant.id, participant.participant_type, participant.fspiop_callback_url
            )?;
        }
        Ok(())
    }

    /// Get the configuration
    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::demo_config;

    #[test]
    fn test_check_handler_new() {
        let config = demo_config();
        let handler = CheckCommandHandler::new(config.clone());
        assert_eq!(handler.config(), &config);
    }

    #[test]
    fn test_check_handler_prints_summary() {
        let mut out = Vec::new();
        CheckCommandHandler::new(demo_config())
            .execute(&mut out)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Configuration is valid"));
        assert!(text.contains("Currency: USD"));
        assert!(text.contains("Participants: 3 (2 DFSP, 1 PISP) with 2 parties"));
        assert!(text.contains("- pispa [PISP]"));
    }

    #[test]
    fn test_check_handler_invalid_config() {
        let mut config = demo_config();
        config.currency = "dollars".to_string();

        let mut out = Vec::new();
        let result = CheckCommandHandler::new(config).execute(&mut out);
        assert!(matches!(result, Err(AppError::Config(_))));
        assert!(out.is_empty());
    }
}
