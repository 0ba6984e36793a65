use anyhow::Context;
use spark_core::responses::BrainstormResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Ask the mentor about an existing idea. Unlike `idea create`, failures
/// here are errors.
pub async fn run(idea_id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let idea = ctx.service.get_idea(idea_id).await?;
    let feedback = ctx
        .brainstormer()
        .generate(&idea.id, &idea.title, idea.content.as_deref())
        .await
        .with_context(|| format!("mentor feedback for {} failed", idea.id))?;

    output(
        &BrainstormResponse {
            success: true,
            suggestions: feedback,
        },
        flags.format,
    )
}
