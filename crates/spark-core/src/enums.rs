//! Palette, status, priority, suggestion, and acceptance enums for Spark.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `Acceptance` carries a small state machine through `allowed_next_states()`
//! so transitions are enforced at the application layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// IdeaColor
// ---------------------------------------------------------------------------

/// Color tag attached to an idea card.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum IdeaColor {
    #[default]
    Purple,
    Blue,
    Cyan,
    Green,
    Yellow,
    Orange,
    Pink,
    Red,
}

impl IdeaColor {
    /// Every palette entry, in display order.
    pub const ALL: [Self; 8] = [
        Self::Purple,
        Self::Blue,
        Self::Cyan,
        Self::Green,
        Self::Yellow,
        Self::Orange,
        Self::Pink,
        Self::Red,
    ];

    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Purple => "purple",
            Self::Blue => "blue",
            Self::Cyan => "cyan",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Pink => "pink",
            Self::Red => "red",
        }
    }
}

impl fmt::Display for IdeaColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// IdeaStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of an idea. Any status may be set through an update.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum IdeaStatus {
    #[default]
    Active,
    Archived,
    Completed,
}

impl IdeaStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Archived => "archived",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for IdeaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// IdeaPriority
// ---------------------------------------------------------------------------

/// Optional priority of an idea.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IdeaPriority {
    Low,
    Medium,
    High,
}

impl IdeaPriority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for IdeaPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// IdeaSort
// ---------------------------------------------------------------------------

/// Ordering for idea queries.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum IdeaSort {
    /// Manual board position, ascending.
    #[default]
    Position,
    /// Most recently updated first.
    Recent,
    /// Oldest created first.
    Oldest,
    /// Title, case-insensitive.
    Alphabetical,
    /// High, medium (or unset), low.
    Priority,
}

impl IdeaSort {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Recent => "recent",
            Self::Oldest => "oldest",
            Self::Alphabetical => "alphabetical",
            Self::Priority => "priority",
        }
    }
}

impl fmt::Display for IdeaSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SuggestionType
// ---------------------------------------------------------------------------

/// Kind of AI-generated feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionType {
    Refinement,
    WhatIf,
    NextStep,
    Verdict,
}

impl SuggestionType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Refinement => "refinement",
            Self::WhatIf => "what_if",
            Self::NextStep => "next_step",
            Self::Verdict => "verdict",
        }
    }

    /// Whether a suggestion of this kind can be accepted or dismissed.
    /// The verdict is an overall assessment, not an action item.
    #[must_use]
    pub const fn is_actionable(self) -> bool {
        !matches!(self, Self::Verdict)
    }
}

impl fmt::Display for SuggestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Acceptance
// ---------------------------------------------------------------------------

/// Tri-state decision on a suggestion.
///
/// ```text
/// unset → accepted
///       → dismissed
/// ```
///
/// Stored as a nullable boolean (`NULL`, `1`, `0`).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Acceptance {
    #[default]
    Unset,
    Accepted,
    Dismissed,
}

impl Acceptance {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Unset => &[Self::Accepted, Self::Dismissed],
            Self::Accepted | Self::Dismissed => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Decode the nullable storage flag.
    #[must_use]
    pub const fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            None => Self::Unset,
            Some(true) => Self::Accepted,
            Some(false) => Self::Dismissed,
        }
    }

    /// Encode to the nullable storage flag.
    #[must_use]
    pub const fn as_flag(self) -> Option<bool> {
        match self {
            Self::Unset => None,
            Self::Accepted => Some(true),
            Self::Dismissed => Some(false),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unset => "unset",
            Self::Accepted => "accepted",
            Self::Dismissed => "dismissed",
        }
    }
}

impl fmt::Display for Acceptance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn default_color_is_purple() {
        assert_eq!(IdeaColor::default(), IdeaColor::Purple);
    }

    #[test]
    fn color_serializes_snake_case() {
        for color in IdeaColor::ALL {
            let json = serde_json::to_string(&color).unwrap();
            assert_eq!(json, format!("\"{}\"", color.as_str()));
        }
    }

    #[test]
    fn suggestion_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&SuggestionType::WhatIf).unwrap(),
            "\"what_if\""
        );
        assert_eq!(
            serde_json::to_string(&SuggestionType::NextStep).unwrap(),
            "\"next_step\""
        );
    }

    #[test]
    fn only_verdict_is_not_actionable() {
        assert!(SuggestionType::Refinement.is_actionable());
        assert!(SuggestionType::WhatIf.is_actionable());
        assert!(SuggestionType::NextStep.is_actionable());
        assert!(!SuggestionType::Verdict.is_actionable());
    }

    #[rstest]
    #[case(Acceptance::Unset, Acceptance::Accepted, true)]
    #[case(Acceptance::Unset, Acceptance::Dismissed, true)]
    #[case(Acceptance::Unset, Acceptance::Unset, false)]
    #[case(Acceptance::Accepted, Acceptance::Dismissed, false)]
    #[case(Acceptance::Accepted, Acceptance::Unset, false)]
    #[case(Acceptance::Dismissed, Acceptance::Accepted, false)]
    #[case(Acceptance::Dismissed, Acceptance::Unset, false)]
    fn acceptance_transitions(
        #[case] from: Acceptance,
        #[case] to: Acceptance,
        #[case] allowed: bool,
    ) {
        assert_eq!(from.can_transition_to(to), allowed);
    }

    #[rstest]
    #[case(None, Acceptance::Unset)]
    #[case(Some(true), Acceptance::Accepted)]
    #[case(Some(false), Acceptance::Dismissed)]
    fn acceptance_flag_mapping(#[case] flag: Option<bool>, #[case] state: Acceptance) {
        assert_eq!(Acceptance::from_flag(flag), state);
        assert_eq!(state.as_flag(), flag);
    }
}
