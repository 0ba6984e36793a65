use spark_core::enums::Acceptance;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: &str,
    target: Acceptance,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let suggestion = ctx.service.decide_suggestion(id, target).await?;
    output(&suggestion, flags.format)
}
