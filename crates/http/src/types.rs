//! Request and response bodies of the account API

use chrono::{DateTime, Utc};
use passage_core::session::SessionCredentials;
use passage_core::validation::{
    ForgotPasswordForm, LoginForm, PasswordChangeForm, RegistrationForm, ResetPasswordForm,
};
use serde::{Deserialize, Serialize};

/// `POST /api/auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl From<&LoginForm> for LoginRequest {
    fn from(form: &LoginForm) -> Self {
        Self {
            username: form.username.trim().to_owned(),
            password: form.password.clone(),
        }
    }
}

/// Credential pair issued on login
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPairResponse {
    pub access: String,
    pub refresh: String,
}

impl From<TokenPairResponse> for SessionCredentials {
    fn from(pair: TokenPairResponse) -> Self {
        Self::new(pair.access, pair.refresh)
    }
}

impl std::fmt::Debug for TokenPairResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenPairResponse").finish_non_exhaustive()
    }
}

/// `POST /api/auth/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl From<&RegistrationForm> for RegisterRequest {
    fn from(form: &RegistrationForm) -> Self {
        Self {
            username: form.username.trim().to_owned(),
            email: form.email.trim().to_owned(),
            password: form.password.clone(),
        }
    }
}

/// `POST /api/auth/refresh`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// New access credential; `refresh` is set when the server rotates it
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<String>,
}

impl std::fmt::Debug for RefreshResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshResponse")
            .field("rotated", &self.refresh.is_some())
            .finish_non_exhaustive()
    }
}

/// `POST /api/auth/forgot-password/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

impl From<&ForgotPasswordForm> for ForgotPasswordRequest {
    fn from(form: &ForgotPasswordForm) -> Self {
        Self {
            email: form.email.trim().to_owned(),
        }
    }
}

/// `POST /api/auth/reset-password/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub uidb64: String,
    pub token: String,
    pub password: String,
}

impl From<&ResetPasswordForm> for ResetPasswordRequest {
    fn from(form: &ResetPasswordForm) -> Self {
        Self {
            uidb64: form.uidb64.clone(),
            token: form.token.clone(),
            password: form.password.clone(),
        }
    }
}

/// `POST /api/user/change-password/`; the confirmation field stays client-side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

impl From<&PasswordChangeForm> for ChangePasswordRequest {
    fn from(form: &PasswordChangeForm) -> Self {
        Self {
            old_password: form.old_password.clone(),
            new_password: form.new_password.clone(),
        }
    }
}

/// Generic acknowledgement body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// `GET /api/user/profile/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
    pub email: String,
    pub date_joined: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}
