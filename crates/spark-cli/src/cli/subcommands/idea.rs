use clap::{Args, Subcommand};

/// Idea commands.
#[derive(Clone, Debug, Subcommand)]
pub enum IdeaCommands {
    /// Capture an idea and ask the mentor about it.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: Option<String>,
        /// purple, blue, cyan, green, yellow, orange, pink, red
        #[arg(long)]
        color: Option<String>,
        /// Skip mentor feedback.
        #[arg(long)]
        no_brainstorm: bool,
    },
    /// List ideas.
    List {
        /// active, archived, completed
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        search: Option<String>,
        /// position, recent, oldest, alphabetical, priority
        #[arg(long)]
        sort: Option<String>,
    },
    /// Get an idea by ID.
    Get { id: String },
    /// Update an idea.
    Update(IdeaUpdateArgs),
    /// Delete an idea and its suggestions.
    Delete { id: String },
    /// Active ideas idle past their reminder window.
    Stale,
    /// Put ideas in this board order.
    Reorder {
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Debug, Default, Args)]
pub struct IdeaUpdateArgs {
    pub id: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long, conflicts_with = "clear_content")]
    pub content: Option<String>,
    #[arg(long)]
    pub clear_content: bool,
    #[arg(long)]
    pub color: Option<String>,
    /// active, archived, completed
    #[arg(long)]
    pub status: Option<String>,
    /// low, medium, high
    #[arg(long, conflicts_with = "clear_priority")]
    pub priority: Option<String>,
    #[arg(long)]
    pub clear_priority: bool,
    #[arg(long, conflicts_with = "clear_reminder")]
    pub reminder_days: Option<u32>,
    #[arg(long)]
    pub clear_reminder: bool,
    #[arg(long)]
    pub position: Option<i64>,
}
