//! Feedback generation for one idea: ask the model, then persist the result.
//!
//! A model failure is returned to the caller and nothing is written. A
//! storage failure after a successful model call is logged and the feedback
//! is still returned.

use std::sync::Arc;

use spark_core::entities::Idea;
use spark_core::feedback::MentorFeedback;
use spark_db::service::SparkService;
use spark_mentor::{FeedbackModel, MentorError};
use tokio::task::JoinHandle;
use tracing::Instrument;

#[derive(Clone)]
pub struct Brainstormer {
    service: SparkService,
    model: Arc<dyn FeedbackModel>,
}

impl Brainstormer {
    #[must_use]
    pub fn new(service: SparkService, model: Arc<dyn FeedbackModel>) -> Self {
        Self { service, model }
    }

    /// Generate feedback for `idea_id` and store it as suggestion rows.
    ///
    /// # Errors
    ///
    /// Returns the [`MentorError`] of the model call. Storage errors are not
    /// surfaced.
    pub async fn generate(
        &self,
        idea_id: &str,
        title: &str,
        content: Option<&str>,
    ) -> Result<MentorFeedback, MentorError> {
        let feedback = self.model.brainstorm(title, content).await?;

        match self.service.insert_suggestions(idea_id, &feedback).await {
            Ok(rows) => {
                tracing::info!(idea_id, count = rows.len(), "suggestions stored");
            }
            Err(e) => {
                tracing::error!(idea_id, error = %e, "failed to store suggestions");
            }
        }
        Ok(feedback)
    }

    /// Generate in a detached task. Failures are logged, never returned.
    pub fn spawn(self, idea: &Idea) -> JoinHandle<()> {
        let span = tracing::info_span!("brainstorm", idea_id = %idea.id);
        let idea_id = idea.id.clone();
        let title = idea.title.clone();
        let content = idea.content.clone();
        tokio::spawn(
            async move {
                if let Err(e) = self.generate(&idea_id, &title, content.as_deref()).await {
                    tracing::warn!(error = %e, "background brainstorm failed");
                }
            }
            .instrument(span),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use spark_core::enums::{Acceptance, SuggestionType};
    use spark_core::identity::AuthIdentity;
    use spark_db::SparkDb;

    struct FixedModel {
        rate_limited: bool,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl FeedbackModel for FixedModel {
        async fn brainstorm(
            &self,
            _title: &str,
            _content: Option<&str>,
        ) -> Result<MentorFeedback, MentorError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.rate_limited {
                return Err(MentorError::RateLimited);
            }
            Ok(MentorFeedback {
                refinements: vec!["Add scheduling".into()],
                what_ifs: vec!["What if it's subscription-based?".into()],
                next_steps: vec!["Sketch a wireframe".into()],
                verdict: "Worth a weekend prototype.".into(),
            })
        }
    }

    async fn service() -> SparkService {
        let db = SparkDb::open_local(":memory:").await.unwrap();
        SparkService::new(Arc::new(db), Some(AuthIdentity::new("user_1")))
    }

    fn model(rate_limited: bool) -> Arc<FixedModel> {
        Arc::new(FixedModel {
            rate_limited,
            calls: AtomicUsize::new(0),
        })
    }

    #[tokio::test]
    async fn pet_sitting_generation_stores_four_rows() {
        let svc = service().await;
        let idea = svc.create_idea("Pet-sitting app", Some(""), None).await.unwrap();

        let brainstormer = Brainstormer::new(svc.clone(), model(false));
        let feedback = brainstormer
            .generate(&idea.id, &idea.title, idea.content.as_deref())
            .await
            .unwrap();
        assert_eq!(feedback.verdict, "Worth a weekend prototype.");

        let rows = svc.list_suggestions(&idea.id).await.unwrap();
        let mut kinds: Vec<_> = rows.iter().map(|s| s.suggestion_type).collect();
        kinds.sort_by_key(|k| k.as_str());
        assert_eq!(
            kinds,
            vec![
                SuggestionType::NextStep,
                SuggestionType::Refinement,
                SuggestionType::Verdict,
                SuggestionType::WhatIf,
            ]
        );
        assert!(rows.iter().all(|s| s.acceptance == Acceptance::Unset));
    }

    #[tokio::test]
    async fn model_failure_writes_nothing() {
        let svc = service().await;
        let idea = svc.create_idea("Pet-sitting app", None, None).await.unwrap();

        let model = model(true);
        let brainstormer = Brainstormer::new(svc.clone(), model.clone());
        let err = brainstormer.generate(&idea.id, &idea.title, None).await;
        assert!(matches!(err, Err(MentorError::RateLimited)));
        assert_eq!(model.calls.load(Ordering::SeqCst), 1);
        assert!(svc.list_suggestions(&idea.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn storage_failure_still_returns_feedback() {
        let svc = service().await;
        let brainstormer = Brainstormer::new(svc.clone(), model(false));
        let feedback = brainstormer
            .generate("ida-doesnotexist0000", "Ghost idea", None)
            .await
            .unwrap();
        assert_eq!(feedback.refinements, vec!["Add scheduling".to_string()]);
    }

    #[tokio::test]
    async fn spawned_generation_completes() {
        let svc = service().await;
        let idea = svc.create_idea("Pet-sitting app", None, None).await.unwrap();
        Brainstormer::new(svc.clone(), model(false))
            .spawn(&idea)
            .await
            .unwrap();
        assert_eq!(svc.list_suggestions(&idea.id).await.unwrap().len(), 4);
    }
}
