pub mod auth;
mod idea;
mod suggestion;

pub use auth::AuthCommands;
pub use idea::{IdeaCommands, IdeaUpdateArgs};
pub use suggestion::SuggestionCommands;
