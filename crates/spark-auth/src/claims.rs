use chrono::{DateTime, Utc};
use spark_core::identity::AuthIdentity;

/// Verified session token claims.
#[derive(Debug, Clone)]
pub struct SparkClaims {
    /// Raw JWT string.
    pub raw_jwt: String,
    /// Owning user ID (`sub` claim).
    pub user_id: String,
    /// `email` claim, if present.
    pub email: Option<String>,
    /// Token expiration time (from `exp` claim).
    pub expires_at: DateTime<Utc>,
}

impl SparkClaims {
    /// Convert to a lightweight `AuthIdentity` for cross-crate passing.
    #[must_use]
    pub fn to_identity(&self) -> AuthIdentity {
        AuthIdentity {
            user_id: self.user_id.clone(),
            email: self.email.clone(),
        }
    }

    /// Check if the token is expired or expires within `buffer_secs`.
    #[must_use]
    pub fn is_near_expiry(&self, buffer_secs: i64) -> bool {
        let threshold = Utc::now() + chrono::TimeDelta::seconds(buffer_secs);
        self.expires_at <= threshold
    }
}
