//! # spark-mentor
//!
//! Turns an idea into structured mentor feedback with one chat-completions
//! call.
//!
//! The request carries a persona system prompt, a user prompt with the idea's
//! title and details, and one function tool, `provide_mentor_feedback`, which
//! the model is forced to call. The tool's arguments are parsed into
//! [`MentorFeedback`]. Requests are never retried.
//!
//! [`FeedbackModel`] is the seam the rest of Spark depends on;
//! [`MentorClient`] is the HTTP implementation.

pub mod error;
mod http;
pub mod prompt;
pub mod wire;

pub use error::MentorError;

use std::time::Duration;

use async_trait::async_trait;
use spark_config::MentorConfig;
use spark_core::feedback::MentorFeedback;

use crate::http::check_response;
use crate::wire::{ChatRequest, parse_feedback};

/// Anything that can produce mentor feedback for an idea.
#[async_trait]
pub trait FeedbackModel: Send + Sync {
    /// Generate feedback for one idea.
    ///
    /// # Errors
    ///
    /// Returns [`MentorError`] describing why no feedback was produced.
    async fn brainstorm(
        &self,
        title: &str,
        content: Option<&str>,
    ) -> Result<MentorFeedback, MentorError>;
}

/// HTTP client for an OpenAI-compatible chat-completions endpoint.
pub struct MentorClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
    model: String,
}

impl MentorClient {
    /// Build a client from configuration. An empty API key is allowed here;
    /// it surfaces as [`MentorError::NotConfigured`] on first use.
    ///
    /// # Errors
    ///
    /// Returns [`MentorError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(config: &MentorConfig) -> Result<Self, MentorError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("spark/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
        })
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl FeedbackModel for MentorClient {
    async fn brainstorm(
        &self,
        title: &str,
        content: Option<&str>,
    ) -> Result<MentorFeedback, MentorError> {
        if !self.is_configured() {
            return Err(MentorError::NotConfigured);
        }

        let user = prompt::user_prompt(title, content);
        let request = ChatRequest::feedback(&self.model, prompt::SYSTEM_PROMPT, &user);

        tracing::debug!(model = %self.model, endpoint = %self.endpoint, "requesting mentor feedback");
        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;
        let body = check_response(resp).await?.text().await?;

        let feedback = parse_feedback(&body)?;
        tracing::debug!(
            refinements = feedback.refinements.len(),
            what_ifs = feedback.what_ifs.len(),
            next_steps = feedback.next_steps.len(),
            "mentor feedback parsed"
        );
        Ok(feedback)
    }
}
