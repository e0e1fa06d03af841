//! Passage HTTP client

pub mod auth;
pub mod error;
pub mod typed;
pub mod user;

pub use typed::{PublicClient, SessionClient};

use error::ClientError;
use passage_core::ApiConfig;
use passage_core::session::SessionManager;
use serde::de::DeserializeOwned;
use std::time::Duration;

const USER_AGENT: &str = concat!("passage-client/", env!("CARGO_PKG_VERSION"));

/// Builder for the public and session-aware clients
#[derive(Debug, Clone, Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from loaded configuration
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new().base_url(config.normalized_base())
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout (ignored on WASM, where the browser default applies)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build a client for unauthenticated endpoints
    pub fn build_public(self) -> Result<PublicClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut client_builder = reqwest::ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Some(timeout) = self.timeout {
                client_builder = client_builder.timeout(timeout);
            }
            client_builder =
                client_builder.user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));
        }

        #[cfg(target_arch = "wasm32")]
        let _ = (self.timeout, self.user_agent);

        Ok(PublicClient::from_parts(client_builder.build()?, base_url))
    }

    /// Build a client that authenticates from the given session
    pub fn build_session(self, session: SessionManager) -> Result<SessionClient, ClientError> {
        Ok(SessionClient::new(self.build_public()?, session))
    }
}

/// Decode a success body; an empty body decodes as an empty object
pub(crate) fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ClientError> {
    let body = if body.trim().is_empty() { "{}" } else { body };
    Ok(serde_json::from_str(body)?)
}

/// Turn a response into `T` or a status error
pub(crate) async fn read_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.text().await?;

    if status.is_success() {
        decode_body(&body)
    } else {
        Err(ClientError::from_status(status, &body))
    }
}
