//! Error types for option stores and presets

use thiserror::Error;

/// Result type for service operations
pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Option store {path} is not a JSON object")]
    InvalidStore { path: String },

    #[error("Failed to write option {key}: {message}")]
    WriteFailed { key: String, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServiceError {
    pub fn invalid_store(path: impl Into<String>) -> Self {
        Self::InvalidStore { path: path.into() }
    }

    pub fn write_failed(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::WriteFailed {
            key: key.into(),
            message: message.into(),
        }
    }
}
