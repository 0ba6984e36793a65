//! Request and response bodies of the HTTP surface.
//!
//! The brainstorm shapes mirror the serverless function contract: camelCase
//! request fields, `{success, suggestions}` on success and `{error}` on
//! failure.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::IdeaColor;
use crate::feedback::MentorFeedback;

/// Body of `POST /functions/v1/brainstorm`.
///
/// Fields are optional at the serde level so that a missing field yields the
/// endpoint's own 400 message instead of a deserializer error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BrainstormRequest {
    #[serde(default)]
    pub idea_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Successful brainstorm response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BrainstormResponse {
    pub success: bool,
    pub suggestions: MentorFeedback,
}

/// Error body shared by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

/// Body of `POST /v1/ideas`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CreateIdeaRequest {
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub color: Option<IdeaColor>,
}

/// Body of `PUT /v1/ideas/order`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReorderRequest {
    pub ids: Vec<String>,
}

/// Response from `GET /healthz`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
