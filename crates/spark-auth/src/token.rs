//! HS256 JWT verification and minting.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::claims::SparkClaims;
use crate::error::AuthError;

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Serialize, Deserialize)]
struct Header {
    alg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    typ: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Payload {
    sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    iat: Option<i64>,
}

fn mac_for(secret: &str) -> Result<HmacSha256, AuthError> {
    if secret.is_empty() {
        return Err(AuthError::NotConfigured);
    }
    HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| AuthError::InvalidToken(format!("hmac init: {e}")))
}

fn decode_part<T: for<'de> Deserialize<'de>>(part: &str, what: &str) -> Result<T, AuthError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(part)
        .map_err(|e| AuthError::InvalidToken(format!("{what} base64 decode failed: {e}")))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| AuthError::InvalidToken(format!("{what} JSON parse failed: {e}")))
}

fn encode_part<T: Serialize>(value: &T) -> Result<String, AuthError> {
    serde_json::to_vec(value)
        .map(|bytes| URL_SAFE_NO_PAD.encode(bytes))
        .map_err(|e| AuthError::InvalidToken(format!("encode failed: {e}")))
}

/// Verify signature and expiry of an HS256 token.
///
/// # Errors
///
/// - `AuthError::NotConfigured` if `secret` is empty.
/// - `AuthError::InvalidToken` for a malformed token, a non-HS256 header, a
///   bad signature or a blank `sub`.
/// - `AuthError::TokenExpired` if `exp` is in the past.
pub fn verify(jwt: &str, secret: &str) -> Result<SparkClaims, AuthError> {
    let mut mac = mac_for(secret)?;

    let parts: Vec<&str> = jwt.split('.').collect();
    let [header_b64, payload_b64, signature_b64] = parts.as_slice() else {
        return Err(AuthError::InvalidToken("invalid JWT format".into()));
    };

    let header: Header = decode_part(header_b64, "header")?;
    if header.alg != "HS256" {
        return Err(AuthError::InvalidToken(format!(
            "unsupported algorithm {}",
            header.alg
        )));
    }

    let signature = URL_SAFE_NO_PAD
        .decode(signature_b64)
        .map_err(|e| AuthError::InvalidToken(format!("signature base64 decode failed: {e}")))?;
    mac.update(header_b64.as_bytes());
    mac.update(b".");
    mac.update(payload_b64.as_bytes());
    mac.verify_slice(&signature)
        .map_err(|_| AuthError::InvalidToken("signature mismatch".into()))?;

    let payload: Payload = decode_part(payload_b64, "payload")?;
    if payload.sub.trim().is_empty() {
        return Err(AuthError::InvalidToken("missing sub claim".into()));
    }
    let expires_at = DateTime::from_timestamp(payload.exp, 0)
        .ok_or_else(|| AuthError::InvalidToken("invalid exp timestamp".into()))?;
    if expires_at <= Utc::now() {
        return Err(AuthError::TokenExpired);
    }

    Ok(SparkClaims {
        raw_jwt: jwt.to_string(),
        user_id: payload.sub,
        email: payload.email,
        expires_at,
    })
}

/// Mint a token for `user_id` valid for `ttl_hours`.
///
/// # Errors
///
/// Returns `AuthError::NotConfigured` if `secret` is empty.
pub fn mint(
    user_id: &str,
    email: Option<&str>,
    secret: &str,
    ttl_hours: u64,
) -> Result<String, AuthError> {
    let mut mac = mac_for(secret)?;
    let now = Utc::now();
    let ttl_secs = i64::try_from(ttl_hours)
        .unwrap_or(i64::MAX)
        .saturating_mul(3600);
    let header = Header {
        alg: "HS256".into(),
        typ: Some("JWT".into()),
    };
    let payload = Payload {
        sub: user_id.to_string(),
        email: email.map(str::to_string),
        exp: now.timestamp().saturating_add(ttl_secs),
        iat: Some(now.timestamp()),
    };
    let signing_input = format!("{}.{}", encode_part(&header)?, encode_part(&payload)?);
    mac.update(signing_input.as_bytes());
    let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());
    Ok(format!("{signing_input}.{signature}"))
}

/// Decode the `exp` claim without verifying the signature.
///
/// Used by the CLI to warn about a stored token that is about to lapse.
///
/// # Errors
///
/// Returns `AuthError::InvalidToken` if the JWT format is invalid or the
/// `exp` claim is missing.
pub fn decode_expiry(jwt: &str) -> Result<DateTime<Utc>, AuthError> {
    let payload_b64 = jwt
        .split('.')
        .nth(1)
        .ok_or_else(|| AuthError::InvalidToken("invalid JWT format".into()))?;
    let payload: Payload = decode_part(payload_b64, "payload")?;
    DateTime::from_timestamp(payload.exp, 0)
        .ok_or_else(|| AuthError::InvalidToken("invalid exp timestamp".into()))
}
