use clap::Subcommand;

/// Suggestion commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SuggestionCommands {
    /// List suggestions for an idea, newest first.
    List {
        idea_id: String,
        /// Bucket by kind instead of a flat list.
        #[arg(long)]
        grouped: bool,
    },
    /// Ask the mentor about an idea and store the answer.
    Generate { idea_id: String },
    /// Mark a suggestion accepted.
    Accept { id: String },
    /// Mark a suggestion dismissed.
    Dismiss { id: String },
}
