//! Unverified decoding of access-token claims
//!
//! The client never validates signatures; it only reads `exp` to decide
//! whether a refresh is needed before rendering a protected view.

use crate::error::{CoreError, CoreResult};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;
use serde_json::Value as JsonValue;

/// Claims read from the access token payload
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AccessClaims {
    /// Expiry, unix seconds
    pub exp: Option<i64>,
    /// Issued-at, unix seconds
    pub iat: Option<i64>,
    pub token_type: Option<String>,
    pub user_id: Option<JsonValue>,
    pub jti: Option<String>,
}

/// Result of checking an access token against the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStatus {
    /// `exp` is strictly in the future
    Valid { expires_at: i64 },
    /// `exp` is now or in the past, or absent
    Expired,
    /// The token could not be decoded
    Malformed,
}

/// Decode the payload segment of a `header.payload.signature` token
pub fn decode_claims(token: &str) -> CoreResult<AccessClaims> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(CoreError::malformed_token("expected three segments"));
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| CoreError::malformed_token(format!("payload is not base64url: {e}")))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| CoreError::malformed_token(format!("payload is not a JSON object: {e}")))
}

/// Classify a token's expiry relative to `now` (unix seconds)
pub fn expiry_status(token: &str, now: i64) -> TokenStatus {
    match decode_claims(token) {
        Ok(AccessClaims {
            exp: Some(exp), ..
        }) if exp > now => TokenStatus::Valid { expires_at: exp },
        Ok(_) => TokenStatus::Expired,
        Err(err) => {
            tracing::debug!(error = %err, "access token could not be decoded");
            TokenStatus::Malformed
        }
    }
}
