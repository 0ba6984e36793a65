use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Acceptance, SuggestionType};

/// One piece of AI-generated feedback tied to an idea.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Suggestion {
    pub id: String,
    pub idea_id: String,
    pub suggestion_type: SuggestionType,
    pub content: String,
    pub acceptance: Acceptance,
    pub created_at: DateTime<Utc>,
}

/// Suggestions of one idea bucketed by kind, each bucket in list order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionGroups {
    pub refinements: Vec<Suggestion>,
    pub what_ifs: Vec<Suggestion>,
    pub next_steps: Vec<Suggestion>,
    pub verdicts: Vec<Suggestion>,
}

impl SuggestionGroups {
    #[must_use]
    pub fn group(suggestions: Vec<Suggestion>) -> Self {
        let mut groups = Self::default();
        for suggestion in suggestions {
            let bucket = match suggestion.suggestion_type {
                SuggestionType::Refinement => &mut groups.refinements,
                SuggestionType::WhatIf => &mut groups.what_ifs,
                SuggestionType::NextStep => &mut groups.next_steps,
                SuggestionType::Verdict => &mut groups.verdicts,
            };
            bucket.push(suggestion);
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestion(id: &str, suggestion_type: SuggestionType) -> Suggestion {
        Suggestion {
            id: id.into(),
            idea_id: "ida-1".into(),
            suggestion_type,
            content: format!("content of {id}"),
            acceptance: Acceptance::Unset,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn group_buckets_by_type_preserving_order() {
        let groups = SuggestionGroups::group(vec![
            suggestion("a", SuggestionType::Refinement),
            suggestion("b", SuggestionType::Verdict),
            suggestion("c", SuggestionType::Refinement),
            suggestion("d", SuggestionType::NextStep),
        ]);

        let refinement_ids: Vec<&str> = groups.refinements.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(refinement_ids, ["a", "c"]);
        assert!(groups.what_ifs.is_empty());
        assert_eq!(groups.next_steps.len(), 1);
        assert_eq!(groups.verdicts.len(), 1);
    }

    #[test]
    fn groups_serialize_camel_case() {
        let json = serde_json::to_value(SuggestionGroups::default()).unwrap();
        assert!(json.get("whatIfs").is_some());
        assert!(json.get("nextSteps").is_some());
    }
}
