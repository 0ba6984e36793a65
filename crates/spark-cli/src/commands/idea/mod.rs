mod create;
mod delete;
mod get;
mod list;
mod reorder;
mod stale;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::IdeaCommands;
use crate::context::AppContext;

/// Handle `spark idea`.
pub async fn handle(
    action: &IdeaCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        IdeaCommands::Create {
            title,
            content,
            color,
            no_brainstorm,
        } => {
            create::run(
                title,
                content.as_deref(),
                color.as_deref(),
                !*no_brainstorm,
                ctx,
                flags,
            )
            .await
        }
        IdeaCommands::List {
            status,
            search,
            sort,
        } => list::run(status.as_deref(), search.as_deref(), sort.as_deref(), ctx, flags).await,
        IdeaCommands::Get { id } => get::run(id, ctx, flags).await,
        IdeaCommands::Update(args) => update::run(args, ctx, flags).await,
        IdeaCommands::Delete { id } => delete::run(id, ctx, flags).await,
        IdeaCommands::Stale => stale::run(ctx, flags).await,
        IdeaCommands::Reorder { ids } => reorder::run(ids, ctx, flags).await,
    }
}
