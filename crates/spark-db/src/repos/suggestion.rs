//! AI suggestion repository: batch insert, listing, and the accept/dismiss
//! state machine.
//!
//! Suggestions have no owner column; ownership is the parent idea's
//! `user_id`, so every statement joins or sub-selects `ideas`.

use chrono::Utc;

use spark_core::entities::{Suggestion, SuggestionGroups};
use spark_core::enums::Acceptance;
use spark_core::feedback::MentorFeedback;
use spark_core::ids::PREFIX_SUGGESTION;

use crate::error::DatabaseError;
use crate::helpers::{fmt_ts, get_opt_bool, parse_datetime, parse_enum};
use crate::service::SparkService;

const ENTITY: &str = "suggestion";

const SELECT_COLS: &str =
    "s.id, s.idea_id, s.suggestion_type, s.content, s.is_accepted, s.created_at";

fn row_to_suggestion(row: &libsql::Row) -> Result<Suggestion, DatabaseError> {
    Ok(Suggestion {
        id: row.get(0)?,
        idea_id: row.get(1)?,
        suggestion_type: parse_enum(&row.get::<String>(2)?)?,
        content: row.get(3)?,
        acceptance: Acceptance::from_flag(get_opt_bool(row, 4)?),
        created_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

impl SparkService {
    /// Persist one batch of mentor feedback for an idea in a single INSERT.
    ///
    /// Rows come out in order refinements, what-ifs, next steps, verdict, all
    /// `Unset`, one row per feedback element.
    ///
    /// # Errors
    ///
    /// `DatabaseError::NotFound` if the idea is not the caller's.
    pub async fn insert_suggestions(
        &self,
        idea_id: &str,
        feedback: &MentorFeedback,
    ) -> Result<Vec<Suggestion>, DatabaseError> {
        self.get_idea(idea_id).await?;

        let drafts = feedback.drafts();

        let now = Utc::now();
        let created_at = fmt_ts(now);
        let mut suggestions = Vec::with_capacity(drafts.len());
        for (suggestion_type, content) in drafts {
            suggestions.push(Suggestion {
                id: self.db().generate_id(PREFIX_SUGGESTION).await?,
                idea_id: idea_id.to_string(),
                suggestion_type,
                content: content.to_string(),
                acceptance: Acceptance::Unset,
                created_at: parse_datetime(&created_at)?,
            });
        }

        // ?1 = idea_id, ?2 = created_at, then (id, type, content) per row.
        let mut values = Vec::with_capacity(suggestions.len());
        let mut params: Vec<libsql::Value> = vec![idea_id.into(), created_at.into()];
        for (n, suggestion) in suggestions.iter().enumerate() {
            let base = 3 + n * 3;
            values.push(format!(
                "(?{base}, ?1, ?{}, ?{}, NULL, ?2)",
                base + 1,
                base + 2
            ));
            params.push(suggestion.id.clone().into());
            params.push(suggestion.suggestion_type.as_str().into());
            params.push(suggestion.content.clone().into());
        }

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO ai_suggestions
                     (id, idea_id, suggestion_type, content, is_accepted, created_at)
                     VALUES {}",
                    values.join(", ")
                ),
                libsql::params_from_iter(params),
            )
            .await?;

        tracing::debug!(idea_id, count = suggestions.len(), "suggestions stored");
        Ok(suggestions)
    }

    /// Suggestions of one idea, newest batch first, insertion order within a
    /// batch.
    ///
    /// # Errors
    ///
    /// `DatabaseError::NotFound` if the idea is not the caller's.
    pub async fn list_suggestions(&self, idea_id: &str) -> Result<Vec<Suggestion>, DatabaseError> {
        self.get_idea(idea_id).await?;
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM ai_suggestions s
                     WHERE s.idea_id = ?1
                     ORDER BY s.created_at DESC, s.rowid ASC"
                ),
                [idea_id],
            )
            .await?;
        let mut suggestions = Vec::new();
        while let Some(row) = rows.next().await? {
            suggestions.push(row_to_suggestion(&row)?);
        }
        Ok(suggestions)
    }

    /// [`Self::list_suggestions`] bucketed by type.
    ///
    /// # Errors
    ///
    /// Same as [`Self::list_suggestions`].
    pub async fn grouped_suggestions(
        &self,
        idea_id: &str,
    ) -> Result<SuggestionGroups, DatabaseError> {
        Ok(SuggestionGroups::group(self.list_suggestions(idea_id).await?))
    }

    /// Fetch one suggestion whose idea belongs to the caller.
    ///
    /// # Errors
    ///
    /// `DatabaseError::NotFound` otherwise.
    pub async fn get_suggestion(&self, id: &str) -> Result<Suggestion, DatabaseError> {
        let owner = self.owner_id()?;
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM ai_suggestions s
                     JOIN ideas i ON i.id = s.idea_id
                     WHERE s.id = ?1 AND i.user_id = ?2"
                ),
                [id, owner],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found(ENTITY, id))?;
        row_to_suggestion(&row)
    }

    /// Mark a suggestion accepted.
    ///
    /// # Errors
    ///
    /// See [`Self::decide_suggestion`].
    pub async fn accept_suggestion(&self, id: &str) -> Result<Suggestion, DatabaseError> {
        self.decide_suggestion(id, Acceptance::Accepted).await
    }

    /// Mark a suggestion dismissed.
    ///
    /// # Errors
    ///
    /// See [`Self::decide_suggestion`].
    pub async fn dismiss_suggestion(&self, id: &str) -> Result<Suggestion, DatabaseError> {
        self.decide_suggestion(id, Acceptance::Dismissed).await
    }

    /// Move a suggestion from `Unset` to `target`.
    ///
    /// Repeating the decision already recorded returns the suggestion
    /// unchanged. The write only applies while `is_accepted IS NULL`.
    ///
    /// # Errors
    ///
    /// - `DatabaseError::NotFound` if the suggestion's idea is not the caller's.
    /// - `DatabaseError::InvalidTransition` for the opposite decision, or for
    ///   a verdict.
    pub async fn decide_suggestion(
        &self,
        id: &str,
        target: Acceptance,
    ) -> Result<Suggestion, DatabaseError> {
        let owner = self.owner_id()?;
        let current = self.get_suggestion(id).await?;

        let invalid = |from: Acceptance| DatabaseError::InvalidTransition {
            entity_type: ENTITY.to_string(),
            id: id.to_string(),
            from: from.to_string(),
            to: target.to_string(),
        };

        if !current.suggestion_type.is_actionable() {
            return Err(invalid(current.acceptance));
        }
        if current.acceptance == target {
            return Ok(current);
        }
        if !current.acceptance.can_transition_to(target) {
            return Err(invalid(current.acceptance));
        }

        let flag = target.as_flag().map(i64::from);
        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE ai_suggestions SET is_accepted = ?1
                 WHERE id = ?2 AND is_accepted IS NULL
                   AND idea_id IN (SELECT id FROM ideas WHERE user_id = ?3)",
                libsql::params![flag, id, owner],
            )
            .await?;

        if affected == 0 {
            // Lost a race with another decision; report what is stored now.
            let stored = self.get_suggestion(id).await?;
            if stored.acceptance == target {
                return Ok(stored);
            }
            return Err(invalid(stored.acceptance));
        }

        tracing::debug!(suggestion_id = id, acceptance = %target, "suggestion decided");
        Ok(Suggestion {
            acceptance: target,
            ..current
        })
    }
}
