//! Shared harness: the router on an ephemeral port, a chat-completions stub,
//! and an in-process feedback model.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::post;
use serde_json::{Value, json};
use spark_config::MentorConfig;
use spark_core::feedback::MentorFeedback;
use spark_core::identity::AuthIdentity;
use spark_db::SparkDb;
use spark_db::service::SparkService;
use spark_mentor::{FeedbackModel, MentorClient, MentorError};
use spark_server::{AppState, build_router};

pub const SECRET: &str = "test-jwt-secret";

pub struct TestApp {
    pub base: String,
    pub http: reqwest::Client,
    pub db: Arc<SparkDb>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    pub fn service(&self, user: &str) -> SparkService {
        SparkService::new(Arc::clone(&self.db), Some(AuthIdentity::new(user)))
    }
}

pub fn token(user: &str) -> String {
    spark_auth::token::mint(user, None, SECRET, 1).unwrap()
}

pub async fn spawn_app(model: Arc<dyn FeedbackModel>) -> TestApp {
    let db = Arc::new(SparkDb::open_local(":memory:").await.unwrap());
    let state = AppState::new(Arc::clone(&db), model, SECRET).with_max_body_bytes(4096);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, build_router(state)).await.unwrap() });
    TestApp {
        base: format!("http://{addr}"),
        http: reqwest::Client::new(),
        db,
    }
}

pub fn pet_sitting_feedback() -> MentorFeedback {
    MentorFeedback {
        refinements: vec!["Start with one neighbourhood.".into()],
        what_ifs: vec!["What if sitters were vetted by other owners?".into()],
        next_steps: vec!["Interview five dog owners this week.".into()],
        verdict: "Crowded space, but trust is the wedge.".into(),
    }
}

/// Answers every call with the pet-sitting feedback.
#[derive(Default)]
pub struct StubModel {
    pub calls: AtomicUsize,
}

impl StubModel {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FeedbackModel for StubModel {
    async fn brainstorm(
        &self,
        _title: &str,
        _content: Option<&str>,
    ) -> Result<MentorFeedback, MentorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(pet_sitting_feedback())
    }
}

pub fn tool_call_body(feedback: &MentorFeedback) -> Value {
    json!({
        "choices": [{
            "message": {
                "tool_calls": [{
                    "type": "function",
                    "function": {
                        "name": "provide_mentor_feedback",
                        "arguments": serde_json::to_string(feedback).unwrap()
                    }
                }]
            }
        }]
    })
}

/// A chat-completions gateway answering `status` and `body` to every call.
/// Returns a [`MentorClient`] pointed at it and the call counter.
pub async fn spawn_gateway(status: StatusCode, body: Value) -> (Arc<MentorClient>, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let app = Router::new().route(
        "/v1/chat/completions",
        post(move || {
            let counter = Arc::clone(&counter);
            let body = body.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                (status, axum::Json(body))
            }
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

    let client = MentorClient::new(&MentorConfig {
        api_key: "gw-test-key".into(),
        endpoint: format!("http://{addr}/v1/chat/completions"),
        timeout_secs: 5,
        ..MentorConfig::default()
    })
    .unwrap();
    (Arc::new(client), hits)
}
