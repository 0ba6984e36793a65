use spark_core::enums::{IdeaColor, IdeaPriority, IdeaStatus};
use spark_db::updates::idea::{IdeaUpdate, IdeaUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::IdeaUpdateArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &IdeaUpdateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let update = build_update(args)?;
    let idea = ctx.service.update_idea(&args.id, update).await?;
    output(&idea, flags.format)
}

fn build_update(args: &IdeaUpdateArgs) -> anyhow::Result<IdeaUpdate> {
    let mut builder = IdeaUpdateBuilder::new();
    let mut touched = false;

    if let Some(title) = &args.title {
        builder = builder.title(title.clone());
        touched = true;
    }
    if let Some(content) = &args.content {
        builder = builder.content(Some(content.clone()));
        touched = true;
    } else if args.clear_content {
        builder = builder.content(None);
        touched = true;
    }
    if let Some(color) = &args.color {
        builder = builder.color(parse_enum::<IdeaColor>(color, "color")?);
        touched = true;
    }
    if let Some(status) = &args.status {
        builder = builder.status(parse_enum::<IdeaStatus>(status, "status")?);
        touched = true;
    }
    if let Some(priority) = &args.priority {
        builder = builder.priority(Some(parse_enum::<IdeaPriority>(priority, "priority")?));
        touched = true;
    } else if args.clear_priority {
        builder = builder.priority(None);
        touched = true;
    }
    if let Some(days) = args.reminder_days {
        builder = builder.reminder_days(Some(days));
        touched = true;
    } else if args.clear_reminder {
        builder = builder.reminder_days(None);
        touched = true;
    }
    if let Some(position) = args.position {
        builder = builder.position(position);
        touched = true;
    }

    if !touched {
        anyhow::bail!(
            "At least one of --title, --content, --color, --status, --priority, --reminder-days, or --position must be provided"
        );
    }
    Ok(builder.build())
}
