//! Mentor client error types.

use thiserror::Error;

/// Errors from one feedback generation. None of them is retried.
#[derive(Debug, Error)]
pub enum MentorError {
    /// No API key configured; raised before any network I/O.
    #[error("mentor API key is not configured (set mentor.api_key)")]
    NotConfigured,

    /// The gateway answered 429.
    #[error("Rate limit exceeded. Please try again in a moment.")]
    RateLimited,

    /// The gateway answered 402.
    #[error("AI credits depleted. Please add credits to continue.")]
    QuotaExhausted,

    /// The response carried no usable tool call.
    #[error("No suggestions returned from AI: {0}")]
    Parse(String),

    /// Any other non-success status.
    #[error("AI gateway error: {status}")]
    Upstream {
        status: u16,
        /// Response body, for logs.
        message: String,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
