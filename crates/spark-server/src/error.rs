//! Error types for spark-server.
//!
//! [`ApiError`] is what handlers return; it renders as `{"error": message}`
//! with the matching status. [`ServerError`] covers startup.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use spark_auth::AuthError;
use spark_core::responses::ErrorBody;
use spark_db::error::DatabaseError;
use spark_mentor::MentorError;
use thiserror::Error;

/// Message for a brainstorm body without `ideaId` or `title`.
pub const MISSING_FIELDS: &str = "Missing required fields: ideaId and title";

/// An error that becomes an HTTP response.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("{0}")]
    RateLimited(String),

    #[error("{0}")]
    PaymentRequired(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            Self::PaymentRequired(_) => StatusCode::PAYMENT_REQUIRED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::Validation(_) => Self::BadRequest(err.to_string()),
            DatabaseError::Unauthenticated => Self::Unauthorized(err.to_string()),
            DatabaseError::NotFound { .. } => Self::NotFound(err.to_string()),
            DatabaseError::InvalidTransition { .. } => Self::Conflict(err.to_string()),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<MentorError> for ApiError {
    fn from(err: MentorError) -> Self {
        match err {
            MentorError::RateLimited => Self::RateLimited(err.to_string()),
            MentorError::QuotaExhausted => Self::PaymentRequired(err.to_string()),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::NotConfigured => Self::Internal(err.to_string()),
            other => Self::Unauthorized(other.to_string()),
        }
    }
}

/// Failures while assembling or running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("server is not configured: {0}")]
    NotConfigured(String),

    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Mentor(#[from] MentorError),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
