use spark_core::enums::{IdeaSort, IdeaStatus};
use spark_db::repos::idea::IdeaFilter;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_opt;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    status: Option<&str>,
    search: Option<&str>,
    sort: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let filter = IdeaFilter {
        status: parse_opt::<IdeaStatus>(status, "status")?,
        search: search.map(str::to_string),
        sort: parse_opt::<IdeaSort>(sort, "sort")?.unwrap_or_default(),
        limit: effective_limit(flags.limit, ctx.config.general.default_limit),
    };
    let ideas = ctx.service.query_ideas(&filter).await?;
    output(&ideas, flags.format)
}
