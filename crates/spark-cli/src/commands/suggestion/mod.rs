mod decide;
mod generate;
mod list;

use spark_core::enums::Acceptance;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SuggestionCommands;
use crate::context::AppContext;

/// Handle `spark suggestion`.
pub async fn handle(
    action: &SuggestionCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SuggestionCommands::List { idea_id, grouped } => {
            list::run(idea_id, *grouped, ctx, flags).await
        }
        SuggestionCommands::Generate { idea_id } => generate::run(idea_id, ctx, flags).await,
        SuggestionCommands::Accept { id } => {
            decide::run(id, Acceptance::Accepted, ctx, flags).await
        }
        SuggestionCommands::Dismiss { id } => {
            decide::run(id, Acceptance::Dismissed, ctx, flags).await
        }
    }
}
