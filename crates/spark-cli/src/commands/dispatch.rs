use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Idea { action } => commands::idea::handle(&action, ctx, flags).await,
        Commands::Suggestion { action } => commands::suggestion::handle(&action, ctx, flags).await,
        Commands::Serve(_) | Commands::Auth { .. } => {
            anyhow::bail!("serve and auth run before the application context is built")
        }
    }
}
