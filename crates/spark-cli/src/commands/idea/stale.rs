use chrono::Utc;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let ideas = ctx.service.list_stale_ideas(Utc::now()).await?;
    output(&ideas, flags.format)
}
