//! Flow services behind the views
//!
//! Each flow validates locally first and only then talks to the API. Every
//! failure comes back as a [`FlowError`] whose `Display` is the single
//! message shown to the user.

pub mod auth;
pub mod profile;

pub use auth::AuthApiService;
pub use profile::ProfileApiService;

use crate::client::error::ClientError;
use passage_core::{CoreError, ValidationError};
use thiserror::Error;

/// Shown when authorization cannot be recovered by a refresh
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please sign in again.";

/// Failure of a user-facing flow
#[derive(Debug, Error)]
pub enum FlowError {
    /// Rejected locally; no request was sent
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The request failed
    #[error("{message}")]
    Api {
        message: String,
        #[source]
        source: ClientError,
    },

    /// Credentials could not be persisted
    #[error("Could not save your session. Please check your browser storage settings.")]
    Storage(#[from] CoreError),
}

impl FlowError {
    /// Wrap a client error, preferring the server's own message over `fallback`
    pub fn api(source: ClientError, fallback: &str) -> Self {
        let message = match &source {
            ClientError::SessionExpired => SESSION_EXPIRED_MESSAGE.to_owned(),
            other => other.user_message(fallback),
        };
        Self::Api { message, source }
    }

    /// Whether the user has to sign in again
    pub fn is_session_expired(&self) -> bool {
        matches!(
            self,
            Self::Api {
                source: ClientError::SessionExpired,
                ..
            }
        )
    }

    /// Whether the failure happened before any request was sent
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}
