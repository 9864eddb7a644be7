//! Error types for wisp

use thiserror::Error;

/// The main error type for wisp operations
#[derive(Debug, Error)]
pub enum WispError {
    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),
}

/// Result type alias for wisp operations
pub type Result<T> = std::result::Result<T, WispError>;

impl From<toml::de::Error> for WispError {
    fn from(err: toml::de::Error) -> Self {
        WispError::TomlParseError(err.to_string())
    }
}
