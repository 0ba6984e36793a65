//! Chat-completions (mentor model) configuration.

use serde::{Deserialize, Serialize};

fn default_endpoint() -> String {
    "https://ai.gateway.lovable.dev/v1/chat/completions".into()
}

fn default_model() -> String {
    "google/gemini-3-flash-preview".into()
}

const fn default_timeout_secs() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MentorConfig {
    /// Bearer key for the AI gateway. Empty means generation is disabled.
    #[serde(default)]
    pub api_key: String,

    /// Chat-completions endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for MentorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: default_endpoint(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl MentorConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}
