//! Error types for altergen

use thiserror::Error;

/// Result type for altergen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for altergen
#[derive(Error, Debug)]
pub enum Error {
    #[error("Table names don't match: {old} vs {new}")]
    SchemaMismatch { old: String, new: String },

    #[error("Please provide both original and new CREATE TABLE scripts")]
    EmptyInput,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Convert Serde JSON errors to altergen errors
impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::SerializationError(error.to_string())
    }
}

/// Convert TOML deserialization errors to altergen errors
impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Error::ConfigError(error.to_string())
    }
}
