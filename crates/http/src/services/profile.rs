//! Profile view and password change

use super::FlowError;
use crate::client::SessionClient;
use crate::types::{ChangePasswordRequest, UserProfile};
use passage_core::validation::PasswordChangeForm;
use tracing::info;

const PROFILE_FAILURE: &str = "Failed to load profile data";
const CHANGE_PASSWORD_FAILURE: &str = "Failed to change password";

/// Confirmation shown after a successful password change
pub const PASSWORD_CHANGED: &str = "Password changed successfully!";

#[derive(Clone)]
pub struct ProfileApiService {
    client: SessionClient,
}

impl ProfileApiService {
    pub fn new(client: SessionClient) -> Self {
        Self { client }
    }

    pub async fn load_profile(&self) -> Result<UserProfile, FlowError> {
        self.client
            .profile()
            .await
            .map_err(|e| FlowError::Api {
                message: if e.is_auth_expired() {
                    super::SESSION_EXPIRED_MESSAGE.to_owned()
                } else {
                    PROFILE_FAILURE.to_owned()
                },
                source: e,
            })
    }

    /// Change the password; locally cached profile fields stay untouched
    pub async fn change_password(&self, form: &PasswordChangeForm) -> Result<&'static str, FlowError> {
        form.validate()?;

        self.client
            .change_password(&ChangePasswordRequest::from(form))
            .await
            .map_err(|e| FlowError::api(e, CHANGE_PASSWORD_FAILURE))?;

        info!("password changed");
        Ok(PASSWORD_CHANGED)
    }
}
