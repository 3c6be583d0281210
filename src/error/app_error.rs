use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Application-wide error type for the command-line surface.
///
/// Configuration failures are carried through unchanged so their field path
/// and message reach the operator; everything else gets enough context to
/// explain what the command was doing.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration could not be loaded or failed validation
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing configuration for output failed
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Validation error with field-specific details
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },
}

impl AppError {
    pub fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
