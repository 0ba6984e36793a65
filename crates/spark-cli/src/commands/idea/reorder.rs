use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Apply the order, then print the board as it now stands.
pub async fn run(ids: &[String], ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.service.reorder_ideas(ids).await?;
    let ideas = ctx.service.list_ideas().await?;
    output(&ideas, flags.format)
}
