//! Suggestion handlers: grouped listing and accept/dismiss decisions.

use axum::Json;
use axum::extract::{Path, State};
use spark_core::entities::{Suggestion, SuggestionGroups};

use crate::AppState;
use crate::auth::Authenticated;
use crate::error::ApiError;

pub async fn list_handler(
    State(state): State<AppState>,
    Authenticated(identity): Authenticated,
    Path(idea_id): Path<String>,
) -> Result<Json<SuggestionGroups>, ApiError> {
    Ok(Json(
        state.service(identity).grouped_suggestions(&idea_id).await?,
    ))
}

pub async fn accept_handler(
    State(state): State<AppState>,
    Authenticated(identity): Authenticated,
    Path(id): Path<String>,
) -> Result<Json<Suggestion>, ApiError> {
    Ok(Json(state.service(identity).accept_suggestion(&id).await?))
}

pub async fn dismiss_handler(
    State(state): State<AppState>,
    Authenticated(identity): Authenticated,
    Path(id): Path<String>,
) -> Result<Json<Suggestion>, ApiError> {
    Ok(Json(state.service(identity).dismiss_suggestion(&id).await?))
}
