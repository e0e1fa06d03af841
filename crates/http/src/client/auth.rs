//! Authentication endpoints (public)

use super::{error::ClientError, typed::PublicClient};
use crate::types::{
    ForgotPasswordRequest, LoginRequest, MessageResponse, RefreshRequest, RefreshResponse,
    RegisterRequest, ResetPasswordRequest, TokenPairResponse,
};
use async_trait::async_trait;
use passage_core::guard::{CredentialRefresher, RefreshedCredentials};
use passage_core::{CoreError, CoreResult};
use reqwest::Method;

impl PublicClient {
    /// Exchange username (or email) and password for a credential pair
    pub async fn login(&self, request: &LoginRequest) -> Result<TokenPairResponse, ClientError> {
        let req = self
            .request(Method::POST, "/api/auth/login")
            .json(request);
        self.execute(req).await
    }

    /// Create an account
    pub async fn register(&self, request: &RegisterRequest) -> Result<MessageResponse, ClientError> {
        let req = self
            .request(Method::POST, "/api/auth/register")
            .json(request);
        self.execute(req).await
    }

    /// Exchange a refresh credential for a new access credential
    pub async fn refresh_access(&self, refresh: &str) -> Result<RefreshResponse, ClientError> {
        let req = self
            .request(Method::POST, "/api/auth/refresh")
            .json(&RefreshRequest {
                refresh: refresh.to_owned(),
            });
        self.execute(req).await
    }

    /// Ask for password reset instructions to be emailed
    pub async fn forgot_password(
        &self,
        request: &ForgotPasswordRequest,
    ) -> Result<MessageResponse, ClientError> {
        let req = self
            .request(Method::POST, "/api/auth/forgot-password/")
            .json(request);
        self.execute(req).await
    }

    /// Set a new password using the identifiers from a reset link
    pub async fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> Result<MessageResponse, ClientError> {
        let req = self
            .request(Method::POST, "/api/auth/reset-password/")
            .json(request);
        self.execute(req).await
    }
}

#[async_trait(?Send)]
impl CredentialRefresher for PublicClient {
    async fn refresh(&self, refresh_token: &str) -> CoreResult<RefreshedCredentials> {
        let response = self
            .refresh_access(refresh_token)
            .await
            .map_err(|e| CoreError::refresh_rejected(e.to_string()))?;
        Ok(RefreshedCredentials {
            access: response.access,
            refresh: response.refresh,
        })
    }
}
