//! Status-code handling for gateway responses.

use crate::error::MentorError;

/// Check a gateway response, returning it unchanged on success.
///
/// - **429** → [`MentorError::RateLimited`]
/// - **402** → [`MentorError::QuotaExhausted`]
/// - other non-success → [`MentorError::Upstream`] with the body, logged at `warn`
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, MentorError> {
    let status = resp.status();
    if status.as_u16() == 429 {
        return Err(MentorError::RateLimited);
    }
    if status.as_u16() == 402 {
        return Err(MentorError::QuotaExhausted);
    }
    if !status.is_success() {
        let message = resp.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), body = %message, "AI gateway error");
        return Err(MentorError::Upstream {
            status: status.as_u16(),
            message,
        });
    }
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn success_passes_through() {
        let resp = check_response(mock_response(200, "{}")).await.unwrap();
        assert_eq!(resp.status().as_u16(), 200);
    }

    #[tokio::test]
    async fn rate_limited() {
        let err = check_response(mock_response(429, "")).await.unwrap_err();
        assert!(matches!(err, MentorError::RateLimited));
    }

    #[tokio::test]
    async fn quota_exhausted() {
        let err = check_response(mock_response(402, "")).await.unwrap_err();
        assert!(matches!(err, MentorError::QuotaExhausted));
    }

    #[tokio::test]
    async fn other_status_keeps_body() {
        let err = check_response(mock_response(503, "overloaded"))
            .await
            .unwrap_err();
        match err {
            MentorError::Upstream { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "overloaded");
            }
            other => panic!("expected Upstream, got {other:?}"),
        }
    }
}
