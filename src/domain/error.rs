//! Domain error types

use thiserror::Error;

/// Error when an unknown dialog icon is requested
#[derive(Debug, Clone, Error)]
#[error("Invalid icon: \"{input}\". Valid icons are: success, error, warning, info, question")]
pub struct InvalidIconError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },
}
