//! Configuration types for the logger

use anyhow::{Context, Result};
use tracing::Level;

/// Main logger configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    pub level: String, // Will be converted to tracing::Level
    pub format: LogFormat,
    /// Use ANSI colours when stderr is a terminal
    pub colored: bool,
}

impl LoggerConfig {
    /// Create a new logger configuration with validation
    pub fn new(level: impl Into<String>, format: LogFormat, colored: bool) -> Result<Self> {
        let config = Self {
            level: level.into(),
            format,
            colored,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.parse_level()
            .with_context(|| format!("Invalid log level: {}", self.level))?;
        Ok(())
    }

    /// Parse the log level string into a tracing::Level
    pub fn parse_level(&self) -> Result<Level> {
        match self.level.to_lowercase().as_str() {
            "trace" => Ok(Level::TRACE),
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warn" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            _ => anyhow::bail!(
                "Invalid log level '{}'. Valid levels are: trace, debug, info, warn, error",
                self.level
            ),
        }
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
            colored: true,
        }
    }
}

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(LogFormat::Full),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => anyhow::bail!("Invalid log format '{}'. Valid formats are: full, compact, json", s),
        }
    }
}

impl LogFormat {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Full => "full",
            LogFormat::Compact => "compact",
            LogFormat::Json => "json",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggerConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Full);
        assert!(config.colored);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_level_case_insensitive() {
        let config = LoggerConfig::new("DEBUG", LogFormat::Compact, false).unwrap();
        assert_eq!(config.parse_level().unwrap(), Level::DEBUG);
    }

    #[test]
    fn test_invalid_level_rejected() {
        assert!(LoggerConfig::new("verbose", LogFormat::Full, false).is_err());
    }

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("Compact".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert!("xml".parse::<LogFormat>().is_err());
        assert_eq!(LogFormat::Full.as_str(), "full");
    }
}
