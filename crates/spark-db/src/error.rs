//! Database error types for spark-db.

use spark_core::errors::CoreError;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Input rejected before touching the database.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The operation needs a caller identity and none was supplied.
    #[error("Not authenticated")]
    Unauthenticated,

    /// No row with this ID is visible to the caller.
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// A state change that the entity's state machine forbids.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },

    /// A SQL query failed or returned unreadable data.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    pub(crate) fn not_found(entity_type: &str, id: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }
}

impl From<CoreError> for DatabaseError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound { entity_type, id } => Self::NotFound { entity_type, id },
            CoreError::InvalidTransition {
                entity_type,
                id,
                from,
                to,
            } => Self::InvalidTransition {
                entity_type,
                id,
                from,
                to,
            },
            CoreError::Validation(msg) => Self::Validation(msg),
            CoreError::Other(e) => Self::Other(e),
        }
    }
}
