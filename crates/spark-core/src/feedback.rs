//! Mentor feedback payload.
//!
//! This is the structured result the language model returns through its
//! `provide_mentor_feedback` tool call, and the `suggestions` object of the
//! brainstorm endpoint response. Field names are camelCase on the wire.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::SuggestionType;

/// Four buckets of mentor feedback for one idea.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MentorFeedback {
    pub refinements: Vec<String>,
    pub what_ifs: Vec<String>,
    pub next_steps: Vec<String>,
    /// Overall take in two or three sentences.
    pub verdict: String,
}

impl MentorFeedback {
    /// Flatten into `(type, content)` rows: refinements, what-ifs, next steps,
    /// then exactly one verdict.
    #[must_use]
    pub fn drafts(&self) -> Vec<(SuggestionType, &str)> {
        let mut drafts = Vec::with_capacity(
            self.refinements.len() + self.what_ifs.len() + self.next_steps.len() + 1,
        );
        drafts.extend(
            self.refinements
                .iter()
                .map(|c| (SuggestionType::Refinement, c.as_str())),
        );
        drafts.extend(
            self.what_ifs
                .iter()
                .map(|c| (SuggestionType::WhatIf, c.as_str())),
        );
        drafts.extend(
            self.next_steps
                .iter()
                .map(|c| (SuggestionType::NextStep, c.as_str())),
        );
        drafts.push((SuggestionType::Verdict, self.verdict.as_str()));
        drafts
    }
}
