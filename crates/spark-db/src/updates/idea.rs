//! Idea update builder.

use serde::{Deserialize, Serialize};
use spark_core::enums::{IdeaColor, IdeaPriority, IdeaStatus};

use super::double_option;

/// Partial idea update. Also the body of `PATCH /v1/ideas/{id}`, so unknown
/// fields (e.g. `user_id`) are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct IdeaUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub content: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<IdeaColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<IdeaStatus>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub priority: Option<Option<IdeaPriority>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub reminder_days: Option<Option<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
}

pub struct IdeaUpdateBuilder(IdeaUpdate);

impl Default for IdeaUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IdeaUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(IdeaUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn content(mut self, content: Option<String>) -> Self {
        self.0.content = Some(content);
        self
    }

    #[must_use]
    pub const fn color(mut self, color: IdeaColor) -> Self {
        self.0.color = Some(color);
        self
    }

    #[must_use]
    pub const fn status(mut self, status: IdeaStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub const fn priority(mut self, priority: Option<IdeaPriority>) -> Self {
        self.0.priority = Some(priority);
        self
    }

    #[must_use]
    pub const fn reminder_days(mut self, days: Option<u32>) -> Self {
        self.0.reminder_days = Some(days);
        self
    }

    #[must_use]
    pub const fn position(mut self, position: i64) -> Self {
        self.0.position = Some(position);
        self
    }

    #[must_use]
    pub fn build(self) -> IdeaUpdate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_and_null_are_distinct() {
        let update: IdeaUpdate = serde_json::from_str(r#"{"priority": null}"#).unwrap();
        assert_eq!(update.priority, Some(None));
        assert_eq!(update.content, None);
    }

    #[test]
    fn present_values_parse() {
        let update: IdeaUpdate = serde_json::from_str(
            r#"{"title": "New", "color": "red", "status": "archived", "reminder_days": 3}"#,
        )
        .unwrap();
        assert_eq!(
            update,
            IdeaUpdateBuilder::new()
                .title("New")
                .color(IdeaColor::Red)
                .status(IdeaStatus::Archived)
                .reminder_days(Some(3))
                .build()
        );
    }

    #[test]
    fn owner_cannot_be_patched() {
        let result = serde_json::from_str::<IdeaUpdate>(r#"{"user_id": "someone_else"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn serializes_changed_fields_only() {
        let update = IdeaUpdateBuilder::new().content(None).build();
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"content": null}));
    }
}
