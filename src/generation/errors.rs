//! Error types for the generation domain

use thiserror::Error;

/// Errors that can occur during client surface generation.
///
/// Nothing here is fatal to a generation run: acquisition failures degrade to
/// the empty document, and per-operation failures are reported to the
/// error-tracking collaborator while the offending operation is skipped.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Schema loading error: {0}")]
    LoadError(String),

    #[error("Operation {verb} {path} has no operationId")]
    MissingOperationId { verb: String, path: String },

    #[error("Invalid parameter in operation {operation}: {reason}")]
    InvalidParameter { operation: String, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
