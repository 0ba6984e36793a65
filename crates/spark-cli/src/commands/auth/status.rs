use serde::Serialize;
use spark_config::SparkConfig;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Default, Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    user_id: Option<String>,
    email: Option<String>,
    expires_at: Option<String>,
    note: Option<String>,
}

/// Handle `spark auth status`.
pub fn handle(flags: &GlobalFlags, config: &SparkConfig) -> anyhow::Result<()> {
    output(&status(config), flags.format)
}

fn status(config: &SparkConfig) -> AuthStatusResponse {
    if !config.auth.has_session_token() {
        return AuthStatusResponse {
            note: Some("SPARK_AUTH__TOKEN not configured".into()),
            ..AuthStatusResponse::default()
        };
    }
    match spark_auth::token::verify(&config.auth.token, &config.auth.jwt_secret) {
        Ok(claims) => AuthStatusResponse {
            authenticated: true,
            expires_at: Some(claims.expires_at.to_rfc3339()),
            user_id: Some(claims.user_id),
            email: claims.email,
            note: None,
        },
        Err(error) => AuthStatusResponse {
            note: Some(error.to_string()),
            ..AuthStatusResponse::default()
        },
    }
}
