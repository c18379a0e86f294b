//! Domain error types

use thiserror::Error;

/// Error when an inbound notification request cannot be accepted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// Body is not JSON, or not an object with the expected field types
    #[error("invalid request payload: {0}")]
    MalformedPayload(String),

    /// Title or message is empty or absent
    #[error("title and message are required")]
    MissingField,
}

/// Error when an unknown notifier backend is configured
#[derive(Debug, Clone, Error)]
#[error("Invalid backend: \"{input}\". Valid backends are: notify-rust, notify-send")]
pub struct InvalidBackendError {
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
