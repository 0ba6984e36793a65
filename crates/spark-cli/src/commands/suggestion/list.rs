use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    idea_id: &str,
    grouped: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if grouped {
        let groups = ctx.service.grouped_suggestions(idea_id).await?;
        return output(&groups, flags.format);
    }
    let suggestions = ctx.service.list_suggestions(idea_id).await?;
    output(&suggestions, flags.format)
}
