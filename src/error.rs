//! Error types for spamlens
//!
//! The explanation engine never fails; everything here belongs to model
//! loading, classification and configuration.

use thiserror::Error;

/// Result type alias for spamlens operations
pub type Result<T> = std::result::Result<T, SpamError>;

#[derive(Error, Debug)]
pub enum SpamError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Artifact parsed but its contents are unusable
    #[error("Invalid model: {0}")]
    InvalidModel(String),

    /// Classifier could not produce a prediction
    #[error("Classifier error: {0}")]
    Classifier(String),
}
