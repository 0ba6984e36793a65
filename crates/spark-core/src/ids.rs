//! ID prefix constants.
//!
//! IDs are generated by the database as `{prefix}-{16 hex chars}`.

pub const PREFIX_IDEA: &str = "ida";
pub const PREFIX_SUGGESTION: &str = "sug";

/// All prefixes, for tests that iterate over every entity kind.
pub const ALL_PREFIXES: &[&str] = &[PREFIX_IDEA, PREFIX_SUGGESTION];
