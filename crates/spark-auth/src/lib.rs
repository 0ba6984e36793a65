//! # spark-auth
//!
//! Bearer session tokens for Spark.
//!
//! Sessions are issued elsewhere; Spark only verifies them. Tokens are
//! HS256-signed JWTs whose `sub` claim is the owning user ID. The same secret
//! lets `spark auth token` mint tokens for local use.

pub mod claims;
pub mod error;
pub mod token;

pub use claims::SparkClaims;
pub use error::AuthError;

use spark_core::identity::AuthIdentity;

/// Strip an optional `Bearer ` scheme from an `Authorization` header value.
#[must_use]
pub fn bearer_token(header: &str) -> Option<&str> {
    let token = header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))
        .unwrap_or(header)
        .trim();
    (!token.is_empty()).then_some(token)
}

/// Verify a raw token and return the caller identity.
///
/// # Errors
///
/// Returns `AuthError::NotConfigured` for an empty secret,
/// `AuthError::NotAuthenticated` for an empty token, and the verification
/// errors of [`token::verify`] otherwise.
pub fn authenticate(raw: &str, secret: &str) -> Result<AuthIdentity, AuthError> {
    if raw.trim().is_empty() {
        return Err(AuthError::NotAuthenticated);
    }
    let claims = token::verify(raw, secret)?;
    tracing::debug!(user_id = %claims.user_id, "session token verified");
    Ok(claims.to_identity())
}
