use anyhow::Context;
use serde::Serialize;
use spark_config::SparkConfig;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::TokenArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct TokenResponse {
    token: String,
    user_id: String,
    expires_at: String,
}

/// Handle `spark auth token`.
pub fn handle(args: &TokenArgs, flags: &GlobalFlags, config: &SparkConfig) -> anyhow::Result<()> {
    let ttl_hours = args.ttl_hours.unwrap_or(config.auth.token_ttl_hours);
    let token = spark_auth::token::mint(
        &args.user,
        args.email.as_deref(),
        &config.auth.jwt_secret,
        ttl_hours,
    )
    .context("failed to mint session token")?;
    let expires_at = spark_auth::token::decode_expiry(&token)?;

    output(
        &TokenResponse {
            token,
            user_id: args.user.clone(),
            expires_at: expires_at.to_rfc3339(),
        },
        flags.format,
    )
}
