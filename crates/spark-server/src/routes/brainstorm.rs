//! `POST /functions/v1/brainstorm`.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use spark_core::responses::{BrainstormRequest, BrainstormResponse};

use crate::AppState;
use crate::auth::Authenticated;
use crate::error::{ApiError, MISSING_FIELDS};

fn required(field: Option<&String>) -> Option<&str> {
    field.map(String::as_str).filter(|v| !v.trim().is_empty())
}

/// Generate mentor feedback for an idea and store it.
///
/// A body that is not JSON, or lacks `ideaId` or `title`, gets the same 400.
pub async fn brainstorm_handler(
    State(state): State<AppState>,
    Authenticated(identity): Authenticated,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<BrainstormResponse>, ApiError> {
    let body = body.map_err(|e| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(e.body_text())
        } else {
            ApiError::BadRequest(MISSING_FIELDS.into())
        }
    })?;
    let request: BrainstormRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "unreadable brainstorm body");
        ApiError::BadRequest(MISSING_FIELDS.into())
    })?;
    let (Some(idea_id), Some(title)) = (
        required(request.idea_id.as_ref()),
        required(request.title.as_ref()),
    ) else {
        return Err(ApiError::BadRequest(MISSING_FIELDS.into()));
    };

    let feedback = state
        .brainstormer(identity)
        .generate(idea_id, title, request.content.as_deref())
        .await
        .inspect_err(|e| tracing::warn!(idea_id, error = %e, "brainstorm failed"))?;

    Ok(Json(BrainstormResponse {
        success: true,
        suggestions: feedback,
    }))
}
