use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated: missing bearer token")]
    NotAuthenticated,

    #[error("token expired")]
    TokenExpired,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("token signing secret is not configured (set auth.jwt_secret)")]
    NotConfigured,
}
