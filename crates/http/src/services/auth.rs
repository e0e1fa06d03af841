//! Authentication flows

use super::FlowError;
use crate::client::PublicClient;
use crate::types::{ForgotPasswordRequest, LoginRequest, RegisterRequest, ResetPasswordRequest};
use passage_core::session::{SessionCredentials, SessionManager};
use passage_core::validation::{
    ForgotPasswordForm, LoginForm, RegistrationForm, ResetPasswordForm,
};
use tracing::{debug, info, warn};

const GENERIC_FAILURE: &str = "An error occurred. Please try again.";
const RESET_FAILURE: &str = "Something went wrong. Please try again.";

/// Confirmation shown after a forgot-password submission, whatever the outcome server-side
pub const RESET_INSTRUCTIONS_SENT: &str = "Password reset instructions sent to your email";

/// Default confirmation after a successful password reset
pub const PASSWORD_RESET_DONE: &str = "Password has been reset successfully";

/// Login, registration and password recovery
#[derive(Clone)]
pub struct AuthApiService {
    client: PublicClient,
    session: SessionManager,
}

impl AuthApiService {
    pub fn new(client: PublicClient, session: SessionManager) -> Self {
        Self { client, session }
    }

    /// Sign in and store the issued credential pair
    pub async fn login(&self, form: &LoginForm) -> Result<(), FlowError> {
        form.validate()?;

        let pair = self
            .client
            .login(&LoginRequest::from(form))
            .await
            .map_err(|e| FlowError::api(e, GENERIC_FAILURE))?;

        self.session.establish(&SessionCredentials::from(pair))?;
        info!("signed in");
        Ok(())
    }

    /// Create an account; the user signs in separately afterwards
    pub async fn register(&self, form: &RegistrationForm) -> Result<(), FlowError> {
        form.validate()?;

        self.client
            .register(&RegisterRequest::from(form))
            .await
            .map_err(|e| FlowError::api(e, GENERIC_FAILURE))?;

        info!("account created");
        Ok(())
    }

    /// Request reset instructions
    ///
    /// Any answer below 500 is reported as success so the form never reveals
    /// whether an account exists for the address.
    pub async fn request_password_reset(
        &self,
        form: &ForgotPasswordForm,
    ) -> Result<&'static str, FlowError> {
        form.validate()?;

        match self
            .client
            .forgot_password(&ForgotPasswordRequest::from(form))
            .await
        {
            Ok(_) => Ok(RESET_INSTRUCTIONS_SENT),
            Err(err) if err.status().is_some_and(|status| status < 500) => {
                debug!(status = ?err.status(), "forgot-password request not accepted");
                Ok(RESET_INSTRUCTIONS_SENT)
            }
            Err(err) => {
                warn!(error = %err, "forgot-password request failed");
                Err(FlowError::Api {
                    message: GENERIC_FAILURE.to_owned(),
                    source: err,
                })
            }
        }
    }

    /// Set a new password from a reset link; returns the confirmation text
    pub async fn reset_password(&self, form: &ResetPasswordForm) -> Result<String, FlowError> {
        form.validate()?;

        let response = self
            .client
            .reset_password(&ResetPasswordRequest::from(form))
            .await
            .map_err(|e| FlowError::api(e, RESET_FAILURE))?;

        Ok(response
            .message
            .unwrap_or_else(|| PASSWORD_RESET_DONE.to_owned()))
    }

    /// Drop the stored credentials; safe to call without a session
    pub fn logout(&self) -> Result<(), FlowError> {
        self.session.teardown()?;
        info!("signed out");
        Ok(())
    }
}
