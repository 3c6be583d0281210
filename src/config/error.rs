//! Configuration error types

use std::path::PathBuf;

use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file exists but could not be read
    #[error("Failed to read configuration file {}: {source}", path.display())]
    Io {
        /// The file that could not be read
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Validation error with field and message
    #[error("Validation error: {field} - {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// The validation error message
        message: String,
    },

    /// Generic configuration error from config crate
    #[error("Configuration error: {0}")]
    Other(#[from] config::ConfigError),
}

impl ConfigError {
    /// Create a new validation error
    pub fn validation<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        ConfigError::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new file not found error
    pub fn file_not_found<S: Into<String>>(path: S) -> Self {
        ConfigError::FileNotFound(path.into())
    }

    /// Create a new I/O error for the given file
    pub fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.into(),
            source,
        }
    }

    /// Field path of a validation error, if this is one
    pub fn field(&self) -> Option<&str> {
        match self {
            ConfigError::ValidationError { field, .. } => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ConfigError::validation("urls.fspiop", "URL cannot be empty");
        assert_eq!(
            err.to_string(),
            "Validation error: urls.fspiop - URL cannot be empty"
        );
        assert_eq!(err.field(), Some("urls.fspiop"));
    }

    #[test]
    fn test_io_error_display_includes_path() {
        let err = ConfigError::io(
            "/etc/switch/config.json5",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/etc/switch/config.json5"));
        assert!(msg.contains("denied"));
        assert_eq!(err.field(), None);
    }
}
