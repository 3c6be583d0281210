//! Error types for the logger

use thiserror::Error;

/// Errors that can occur while setting up logging
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Logger already initialized: {message}")]
    AlreadyInitialized { message: String },
}

impl LoggerError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }

    pub fn already_initialized(message: impl Into<String>) -> Self {
        Self::AlreadyInitialized { message: message.into() }
    }
}
