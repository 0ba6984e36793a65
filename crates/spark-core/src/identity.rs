use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lightweight authenticated user identity for cross-crate passing.
///
/// Produced by `spark-auth`, consumed by `spark-db` to scope every query to
/// the owning user. Contains only data fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AuthIdentity {
    /// Owning user ID (from the session token `sub` claim).
    pub user_id: String,
    /// Email address, when the token carries one.
    pub email: Option<String>,
}

impl AuthIdentity {
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email: None,
        }
    }
}
