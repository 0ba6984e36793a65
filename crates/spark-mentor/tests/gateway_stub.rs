//! `MentorClient` against an in-process chat-completions stub.

use std::sync::{Arc, Mutex};

use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};
use spark_config::MentorConfig;
use spark_mentor::{FeedbackModel, MentorClient, MentorError};

#[derive(Default)]
struct Seen {
    bodies: Vec<Value>,
    auth: Vec<String>,
}

async fn spawn_stub(status: StatusCode, body: Value) -> (String, Arc<Mutex<Seen>>) {
    let seen = Arc::new(Mutex::new(Seen::default()));
    let recorder = Arc::clone(&seen);
    let app = Router::new().route(
        "/v1/chat/completions",
        post(move |headers: HeaderMap, Json(request): Json<Value>| {
            let recorder = Arc::clone(&recorder);
            let body = body.clone();
            async move {
                let mut seen = recorder.lock().unwrap();
                seen.bodies.push(request);
                if let Some(auth) = headers.get("authorization") {
                    seen.auth.push(auth.to_str().unwrap().to_string());
                }
                (status, Json(body))
            }
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    (format!("http://{addr}/v1/chat/completions"), seen)
}

fn client(endpoint: String) -> MentorClient {
    MentorClient::new(&MentorConfig {
        api_key: "gw-test-key".into(),
        endpoint,
        timeout_secs: 5,
        ..MentorConfig::default()
    })
    .unwrap()
}

fn tool_call_body() -> Value {
    let arguments = json!({
        "refinements": ["Add scheduling"],
        "whatIfs": ["What if it's subscription-based?"],
        "nextSteps": ["Sketch a wireframe"],
        "verdict": "Worth a weekend prototype."
    })
    .to_string();
    json!({
        "choices": [{
            "message": {
                "tool_calls": [{
                    "type": "function",
                    "function": { "name": "provide_mentor_feedback", "arguments": arguments }
                }]
            }
        }]
    })
}

#[tokio::test]
async fn successful_call_returns_feedback() {
    let (endpoint, seen) = spawn_stub(StatusCode::OK, tool_call_body()).await;
    let feedback = client(endpoint)
        .brainstorm("Pet-sitting app", Some(""))
        .await
        .unwrap();

    assert_eq!(feedback.refinements, ["Add scheduling"]);
    assert_eq!(feedback.verdict, "Worth a weekend prototype.");

    let seen = seen.lock().unwrap();
    assert_eq!(seen.bodies.len(), 1);
    assert_eq!(seen.auth, ["Bearer gw-test-key"]);
    let request = &seen.bodies[0];
    assert_eq!(request["model"], "google/gemini-3-flash-preview");
    assert_eq!(
        request["tool_choice"]["function"]["name"],
        "provide_mentor_feedback"
    );
    let user = request["messages"][1]["content"].as_str().unwrap();
    assert!(user.contains("Title: Pet-sitting app"));
    assert!(user.contains("(No additional details provided)"));
}

#[tokio::test]
async fn status_429_is_rate_limited() {
    let (endpoint, seen) =
        spawn_stub(StatusCode::TOO_MANY_REQUESTS, json!({"error": "slow down"})).await;
    let err = client(endpoint).brainstorm("x", None).await.unwrap_err();
    assert!(matches!(err, MentorError::RateLimited));
    assert_eq!(seen.lock().unwrap().bodies.len(), 1, "no retry");
}

#[tokio::test]
async fn status_402_is_quota_exhausted() {
    let (endpoint, _) = spawn_stub(StatusCode::PAYMENT_REQUIRED, json!({})).await;
    let err = client(endpoint).brainstorm("x", None).await.unwrap_err();
    assert!(matches!(err, MentorError::QuotaExhausted));
}

#[tokio::test]
async fn other_failure_is_upstream() {
    let (endpoint, _) = spawn_stub(StatusCode::BAD_GATEWAY, json!({"error": "down"})).await;
    let err = client(endpoint).brainstorm("x", None).await.unwrap_err();
    assert!(matches!(err, MentorError::Upstream { status: 502, .. }));
}

#[tokio::test]
async fn plain_text_answer_is_parse_error() {
    let body = json!({"choices": [{"message": {"content": "Great idea!"}}]});
    let (endpoint, _) = spawn_stub(StatusCode::OK, body).await;
    let err = client(endpoint).brainstorm("x", None).await.unwrap_err();
    assert!(matches!(err, MentorError::Parse(_)));
}

#[tokio::test]
async fn unreachable_gateway_is_http_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let err = client(format!("http://{addr}/v1/chat/completions"))
        .brainstorm("x", None)
        .await
        .unwrap_err();
    assert!(matches!(err, MentorError::Http(_)));
}
