//! Domain error types

use thiserror::Error;

/// Error when an invalid target rating is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid target rating: \"{input}\". Valid ratings are: good, outstanding")]
pub struct InvalidRatingError {
    pub input: String,
}

/// Error when an invalid output format is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid output format: \"{input}\". Valid formats are: json, docx")]
pub struct InvalidFormatError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
