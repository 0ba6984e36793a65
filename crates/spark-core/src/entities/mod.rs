//! Entity structs for all Spark domain objects.
//!
//! Each entity maps to a table in the libSQL database. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and schema
//! validation.

mod idea;
mod suggestion;

pub use idea::Idea;
pub use suggestion::{Suggestion, SuggestionGroups};
