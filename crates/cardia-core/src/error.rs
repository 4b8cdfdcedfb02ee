//! Error types for cardia-core

use thiserror::Error;

/// Result type alias for cardia operations
pub type Result<T> = std::result::Result<T, CardiaError>;

/// Main error type for cardia operations
#[derive(Error, Debug)]
pub enum CardiaError {
    /// Encoding-related errors
    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodingError),

    /// Model-related errors
    #[error("Model error: {0}")]
    Model(#[from] ModelError),
}

/// Errors produced while mapping categorical input to feature codes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// A categorical field held a value outside its declared set
    #[error("unmapped {field} category: '{value}'")]
    UnmappedCategory { field: &'static str, value: String },
}

impl EncodingError {
    pub fn unmapped(field: &'static str, value: impl Into<String>) -> Self {
        EncodingError::UnmappedCategory {
            field,
            value: value.into(),
        }
    }
}

/// Errors from loading or invoking a scoring model
#[derive(Error, Debug)]
pub enum ModelError {
    /// Model artifact missing at the configured path
    #[error("model artifact not found at {0}")]
    NotFound(String),

    /// IO error reading the artifact
    #[error("failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    /// Artifact exists but does not parse as a model
    #[error("invalid model artifact: {0}")]
    Invalid(String),

    /// Artifact weight count does not match the feature vector length
    #[error("model expects {expected} weights, artifact has {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// No scoring model loaded
    #[error("no scoring model loaded")]
    Unavailable,
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::Invalid(err.to_string())
    }
}
