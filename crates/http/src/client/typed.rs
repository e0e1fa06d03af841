//! Public and session-aware clients

use super::error::ClientError;
use super::read_response;
use passage_core::session::SessionManager;
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Client for endpoints that don't require authentication
#[derive(Clone)]
pub struct PublicClient {
    client: Client,
    base_url: String,
}

impl PublicClient {
    /// Create a new public client
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        super::ClientBuilder::new().base_url(base_url).build_public()
    }

    pub(crate) fn from_parts(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder without authentication
    pub fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        read_response(response).await
    }
}

/// Client that attaches the session's access credential to every request
///
/// A `401` triggers one refresh through the refresh credential and one retry.
/// If the refresh fails or the retry is rejected again, the session is torn
/// down and [`ClientError::SessionExpired`] is returned.
#[derive(Clone)]
pub struct SessionClient {
    public: PublicClient,
    session: SessionManager,
}

impl SessionClient {
    pub fn new(public: PublicClient, session: SessionManager) -> Self {
        Self { public, session }
    }

    /// Send `body` (if any) to `path` and decode the response as `T`
    pub async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send_once(&method, path, body).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return read_response(response).await;
        }

        debug!(%method, path, "access credential rejected, refreshing");
        self.refresh_session().await?;

        let retry = self.send_once(&method, path, body).await?;
        if retry.status() == StatusCode::UNAUTHORIZED {
            warn!(%method, path, "request rejected again after refresh");
            self.end_session();
            return Err(ClientError::SessionExpired);
        }
        read_response(retry).await
    }

    async fn send_once<B>(
        &self,
        method: &Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self.public.request(method.clone(), path);
        if let Some(access) = self.session.access_token() {
            request = request.bearer_auth(access);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        Ok(request.send().await?)
    }

    async fn refresh_session(&self) -> Result<(), ClientError> {
        let Some(refresh) = self.session.refresh_token() else {
            debug!("no refresh credential stored");
            self.end_session();
            return Err(ClientError::SessionExpired);
        };

        match self.public.refresh_access(&refresh).await {
            Ok(refreshed) => {
                if let Err(err) = self
                    .session
                    .update_access(&refreshed.access, refreshed.refresh.as_deref())
                {
                    warn!(error = %err, "could not persist refreshed credential");
                    self.end_session();
                    return Err(ClientError::SessionExpired);
                }
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "refresh request failed");
                self.end_session();
                Err(ClientError::SessionExpired)
            }
        }
    }

    fn end_session(&self) {
        if let Err(err) = self.session.teardown() {
            warn!(error = %err, "could not clear session credentials");
        }
    }
}
