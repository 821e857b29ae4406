//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Malformed or out-of-range input. The message names the offending field.
    #[error("{0}")]
    Validation(String),

    #[error("{entity_type} not found (id {id})")]
    NotFound { entity_type: &'static str, id: i32 },

    #[error("Storage failure: {0}")]
    Storage(#[from] RepoError),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Failures talking to the image generation provider.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Provider request failed: {0}")]
    Request(String),

    #[error("Provider returned {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("Provider response was not understood: {0}")]
    InvalidResponse(String),
}
