//! Request middleware: CORS for browser callers and per-request tracing.

use std::sync::atomic::Ordering;
use std::time::Instant;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::Instrument;

use crate::AppState;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

fn apply_cors(resp: &mut Response) {
    let headers = resp.headers_mut();
    headers.insert(
        HeaderName::from_static("access-control-allow-origin"),
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        HeaderName::from_static("access-control-allow-headers"),
        HeaderValue::from_static(ALLOW_HEADERS),
    );
}

/// Answer every preflight with an empty 200 and put the CORS headers on
/// every response.
pub async fn cors_middleware(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        let mut resp = (StatusCode::OK, Body::empty()).into_response();
        apply_cors(&mut resp);
        return resp;
    }
    let mut resp = next.run(req).await;
    apply_cors(&mut resp);
    resp
}

/// Reuse the caller's `x-request-id` when present, otherwise mint one.
fn request_id(req: &Request, state: &AppState) -> String {
    req.headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty() && v.len() <= 128)
        .map_or_else(
            || {
                let seq = state.request_seq.fetch_add(1, Ordering::Relaxed);
                format!("req-{seq:016x}")
            },
            str::to_string,
        )
}

/// Run the request inside an `http.request` span and echo its request id.
pub async fn request_tracing_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let started = Instant::now();
    let request_id = request_id(&req, &state);
    let span = tracing::info_span!(
        "http.request",
        request_id = %request_id,
        method = %req.method(),
        path = %req.uri().path(),
    );

    let mut resp = next.run(req).instrument(span.clone()).await;

    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    span.in_scope(|| {
        tracing::info!(status = resp.status().as_u16(), elapsed_ms, "request finished");
    });
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        resp.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    resp
}
