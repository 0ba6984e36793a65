//! `/v1/ideas` handlers.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chrono::Utc;
use spark_core::entities::Idea;
use spark_core::responses::{CreateIdeaRequest, ReorderRequest};
use spark_db::repos::idea::IdeaFilter;
use spark_db::updates::idea::IdeaUpdate;

use super::ApiJson;
use crate::AppState;
use crate::auth::Authenticated;
use crate::error::ApiError;

pub async fn list_handler(
    State(state): State<AppState>,
    Authenticated(identity): Authenticated,
    filter: Result<Query<IdeaFilter>, QueryRejection>,
) -> Result<Json<Vec<Idea>>, ApiError> {
    let Query(filter) = filter.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let ideas = state.service(identity).query_ideas(&filter).await?;
    Ok(Json(ideas))
}

/// Create an idea, then brainstorm it in the background.
pub async fn create_handler(
    State(state): State<AppState>,
    Authenticated(identity): Authenticated,
    ApiJson(request): ApiJson<CreateIdeaRequest>,
) -> Result<(StatusCode, Json<Idea>), ApiError> {
    let idea = state
        .service(identity.clone())
        .create_idea(&request.title, request.content.as_deref(), request.color)
        .await?;
    // Detached: the response does not wait for the mentor.
    drop(state.brainstormer(identity).spawn(&idea));
    Ok((StatusCode::CREATED, Json(idea)))
}

pub async fn get_handler(
    State(state): State<AppState>,
    Authenticated(identity): Authenticated,
    Path(id): Path<String>,
) -> Result<Json<Idea>, ApiError> {
    Ok(Json(state.service(identity).get_idea(&id).await?))
}

pub async fn update_handler(
    State(state): State<AppState>,
    Authenticated(identity): Authenticated,
    Path(id): Path<String>,
    ApiJson(update): ApiJson<IdeaUpdate>,
) -> Result<Json<Idea>, ApiError> {
    Ok(Json(state.service(identity).update_idea(&id, update).await?))
}

pub async fn delete_handler(
    State(state): State<AppState>,
    Authenticated(identity): Authenticated,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.service(identity).delete_idea(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn stale_handler(
    State(state): State<AppState>,
    Authenticated(identity): Authenticated,
) -> Result<Json<Vec<Idea>>, ApiError> {
    Ok(Json(state.service(identity).list_stale_ideas(Utc::now()).await?))
}

pub async fn reorder_handler(
    State(state): State<AppState>,
    Authenticated(identity): Authenticated,
    ApiJson(request): ApiJson<ReorderRequest>,
) -> Result<StatusCode, ApiError> {
    state.service(identity).reorder_ideas(&request.ids).await?;
    Ok(StatusCode::NO_CONTENT)
}
