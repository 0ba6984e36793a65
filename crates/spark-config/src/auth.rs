//! Session token configuration.

use serde::{Deserialize, Serialize};

const fn default_token_ttl_hours() -> u64 {
    24
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// HS256 signing secret shared with the session issuer.
    #[serde(default)]
    pub jwt_secret: String,

    /// Session token the CLI acts as.
    #[serde(default)]
    pub token: String,

    /// Lifetime of tokens minted by `spark auth token`.
    #[serde(default = "default_token_ttl_hours")]
    pub token_ttl_hours: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            token: String::new(),
            token_ttl_hours: default_token_ttl_hours(),
        }
    }
}

impl AuthConfig {
    /// Whether tokens can be verified (and minted).
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.jwt_secret.is_empty()
    }

    #[must_use]
    pub fn has_session_token(&self) -> bool {
        !self.token.is_empty()
    }
}
