//! Error types for the Taskboard configuration system

use std::path::PathBuf;
use thiserror::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Configuration parsing failed
    #[error("Failed to parse configuration: {source}")]
    ParseError {
        #[source]
        source: Box<figment::Error>,
    },

    /// Invalid configuration value
    #[error("Invalid configuration value for key '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

impl ConfigError {
    /// Create an invalid value error
    pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        ConfigError::ParseError {
            source: Box::new(error),
        }
    }
}

impl From<taskboard_dnd::DndError> for ConfigError {
    fn from(error: taskboard_dnd::DndError) -> Self {
        match error {
            taskboard_dnd::DndError::InvalidValue { field, message } => {
                ConfigError::InvalidValue {
                    key: field,
                    message,
                }
            }
            other => ConfigError::InvalidValue {
                key: "sensors".to_string(),
                message: other.to_string(),
            },
        }
    }
}
