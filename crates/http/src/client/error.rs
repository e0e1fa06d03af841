//! Client error types

use passage_core::CoreError;
use serde_json::Value;
use thiserror::Error;

/// Client error types
///
/// Status variants carry the consolidated message extracted from the
/// response body, when the body had one.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error; no response was received
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Validation failure (400)
    #[error("Bad request: {}", detail(.0))]
    BadRequest(Option<String>),

    /// Authentication failed (401)
    #[error("Authentication failed: {}", detail(.0))]
    AuthenticationFailed(Option<String>),

    /// Forbidden (403)
    #[error("Forbidden: {}", detail(.0))]
    Forbidden(Option<String>),

    /// Resource not found (404)
    #[error("Resource not found: {}", detail(.0))]
    NotFound(Option<String>),

    /// Any other non-success status
    #[error("Server error {status}: {}", detail(.message))]
    ServerError { status: u16, message: Option<String> },

    /// Authorization still failed after refreshing, or the refresh itself failed
    #[error("Session expired")]
    SessionExpired,

    /// Credential storage failed
    #[error("Session storage error: {0}")]
    Session(#[from] CoreError),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

fn detail(message: &Option<String>) -> &str {
    message.as_deref().unwrap_or("no details")
}

impl ClientError {
    /// Create error from HTTP status code and raw response body
    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let message = extract_error_message(body);
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            status => Self::ServerError { status, message },
        }
    }

    /// HTTP status of the failed response, if there was one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest(_) => Some(400),
            Self::AuthenticationFailed(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::ServerError { status, .. } => Some(*status),
            Self::Request(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Message the server supplied in the error body
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::BadRequest(message)
            | Self::AuthenticationFailed(message)
            | Self::Forbidden(message)
            | Self::NotFound(message)
            | Self::ServerError { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Server-supplied text, or `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_owned()
    }

    /// Whether the user must sign in again
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::SessionExpired | Self::AuthenticationFailed(_))
    }
}

/// Consolidate an error body into one human-readable string
///
/// Precedence: a `detail` string, then an `error` string, then every string
/// found in the body (field errors included) joined with ", ".
pub fn extract_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    for key in ["detail", "error"] {
        if let Some(text) = value.get(key).and_then(Value::as_str) {
            if !text.is_empty() {
                return Some(text.to_owned());
            }
        }
    }

    let mut parts = Vec::new();
    flatten_strings(&value, &mut parts);
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

fn flatten_strings<'a>(value: &'a Value, out: &mut Vec<&'a str>) {
    match value {
        Value::String(text) if !text.is_empty() => out.push(text),
        Value::Array(items) => items.iter().for_each(|item| flatten_strings(item, out)),
        Value::Object(fields) => fields.values().for_each(|item| flatten_strings(item, out)),
        _ => {}
    }
}
