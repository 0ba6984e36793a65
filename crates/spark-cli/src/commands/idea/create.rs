use serde::Serialize;
use spark_core::entities::Idea;
use spark_core::enums::IdeaColor;
use spark_core::feedback::MentorFeedback;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_opt;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct IdeaCreateResponse {
    idea: Idea,
    #[serde(skip_serializing_if = "Option::is_none")]
    feedback: Option<MentorFeedback>,
}

pub async fn run(
    title: &str,
    content: Option<&str>,
    color: Option<&str>,
    brainstorm: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let color = parse_opt::<IdeaColor>(color, "color")?.unwrap_or(ctx.config.general.default_color);
    let idea = ctx.service.create_idea(title, content, Some(color)).await?;

    let feedback = if !brainstorm {
        None
    } else if !ctx.mentor.is_configured() {
        tracing::warn!("mentor.api_key is not set; skipping feedback");
        None
    } else {
        match ctx
            .brainstormer()
            .generate(&idea.id, &idea.title, idea.content.as_deref())
            .await
        {
            Ok(feedback) => Some(feedback),
            Err(error) => {
                tracing::warn!(idea_id = %idea.id, %error, "mentor feedback failed; the idea was saved");
                None
            }
        }
    };

    output(&IdeaCreateResponse { idea, feedback }, flags.format)
}
