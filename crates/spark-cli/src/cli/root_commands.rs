use clap::{Args, Subcommand};

use crate::cli::subcommands::{AuthCommands, IdeaCommands, SuggestionCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP API server.
    Serve(ServeArgs),
    /// Ideas on your board.
    Idea {
        #[command(subcommand)]
        action: IdeaCommands,
    },
    /// Mentor suggestions for an idea.
    Suggestion {
        #[command(subcommand)]
        action: SuggestionCommands,
    },
    /// Session tokens.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Address to listen on (overrides server.bind)
    #[arg(long)]
    pub bind: Option<String>,
}
