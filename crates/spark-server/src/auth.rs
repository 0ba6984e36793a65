//! Caller identity from the `Authorization: Bearer` header.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use spark_auth::{AuthError, authenticate, bearer_token};
use spark_core::identity::AuthIdentity;

use crate::AppState;
use crate::error::ApiError;

/// Extractor for handlers that need a verified caller.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthIdentity);

impl FromRequestParts<AppState> for Authenticated {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(bearer_token)
            .ok_or(AuthError::NotAuthenticated)?;
        let identity = authenticate(token, &state.jwt_secret).inspect_err(|e| {
            tracing::debug!(error = %e, "rejected bearer token");
        })?;
        Ok(Self(identity))
    }
}
