use clap::{Args, Subcommand};

/// Session token commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Mint a session token signed with auth.jwt_secret.
    Token(TokenArgs),
    /// Verify the configured session token (auth.token).
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct TokenArgs {
    #[arg(long)]
    pub user: String,
    #[arg(long)]
    pub email: Option<String>,
    /// Lifetime in hours (defaults to auth.token_ttl_hours)
    #[arg(long)]
    pub ttl_hours: Option<u64>,
}
