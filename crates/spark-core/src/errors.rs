//! Cross-cutting error types for Spark.
//!
//! Domain-specific errors (`DatabaseError`, `MentorError`, `AuthError`) live in
//! their respective crates. The HTTP and CLI layers map them to user-facing
//! responses.

use thiserror::Error;

/// Errors that can be raised by any Spark crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },

    /// Data failed validation (schema, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Normalize and validate an idea title.
///
/// Returns the trimmed title.
///
/// # Errors
///
/// Returns `CoreError::Validation` if the title is empty after trimming.
pub fn normalize_title(title: &str) -> Result<&str, CoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("title must not be empty".into()));
    }
    Ok(trimmed)
}
