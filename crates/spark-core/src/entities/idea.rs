use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{IdeaColor, IdeaPriority, IdeaStatus};

/// A captured idea, owned by exactly one user.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Idea {
    pub id: String,
    /// Owner. Never changes after creation.
    pub user_id: String,
    pub title: String,
    pub content: Option<String>,
    pub color: IdeaColor,
    pub status: IdeaStatus,
    pub priority: Option<IdeaPriority>,
    /// Nudge the owner when the idea has been idle this many days.
    pub reminder_days: Option<u32>,
    /// Manual board ordering, ascending.
    pub position: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_activity_at: DateTime<Utc>,
}

impl Idea {
    /// Whether the idea has been idle longer than its reminder window at `now`.
    #[must_use]
    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        match self.reminder_days {
            // A window past chrono's range never elapses.
            Some(days) if self.status == IdeaStatus::Active => {
                chrono::TimeDelta::try_days(i64::from(days))
                    .and_then(|window| self.last_activity_at.checked_add_signed(window))
                    .is_some_and(|due| due < now)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idea(reminder_days: Option<u32>, idle_days: i64, status: IdeaStatus) -> Idea {
        let now = Utc::now();
        Idea {
            id: "ida-0011223344556677".into(),
            user_id: "user_1".into(),
            title: "Pet-sitting app".into(),
            content: None,
            color: IdeaColor::Purple,
            status,
            priority: None,
            reminder_days,
            position: 0,
            created_at: now,
            updated_at: now,
            last_activity_at: now - chrono::TimeDelta::days(idle_days),
        }
    }

    #[test]
    fn stale_after_reminder_window() {
        assert!(idea(Some(3), 4, IdeaStatus::Active).is_stale(Utc::now()));
    }

    #[test]
    fn fresh_within_reminder_window() {
        assert!(!idea(Some(3), 1, IdeaStatus::Active).is_stale(Utc::now()));
    }

    #[test]
    fn never_stale_without_reminder() {
        assert!(!idea(None, 400, IdeaStatus::Active).is_stale(Utc::now()));
    }

    #[test]
    fn huge_reminder_window_is_never_stale() {
        assert!(!idea(Some(u32::MAX), 400, IdeaStatus::Active).is_stale(Utc::now()));
    }

    #[test]
    fn archived_ideas_are_not_stale() {
        assert!(!idea(Some(1), 10, IdeaStatus::Archived).is_stale(Utc::now()));
    }
}
