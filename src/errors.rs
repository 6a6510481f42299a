//! Error types for paste normalization
//!
//! Malformed markup is never an error: the parser repairs it and the
//! normalizer skips nodes it cannot operate on. The variants here are the
//! faults that abandon a paste entirely, plus configuration loading errors.

use thiserror::Error;

/// Result type alias for paste operations
pub type PasteResult<T> = Result<T, PasteError>;

#[derive(Debug, Error)]
pub enum PasteError {
    /// Markup payload exceeds the configured size limit
    #[error("Markup payload of {size} bytes exceeds the {limit} byte limit")]
    PayloadTooLarge { size: usize, limit: usize },

    /// Element nesting exceeds the configured depth limit
    #[error("Markup nesting exceeds the maximum depth of {limit}")]
    NestingTooDeep { limit: usize },

    /// Configuration failed validation
    #[error("Invalid paste configuration: {0}")]
    InvalidConfig(String),

    /// IO error while loading configuration
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid JSON
    #[error("Failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<anyhow::Error> for PasteError {
    fn from(error: anyhow::Error) -> Self {
        PasteError::InvalidConfig(error.to_string())
    }
}
