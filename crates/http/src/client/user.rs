//! Account endpoints (authenticated)

use super::{error::ClientError, typed::SessionClient};
use crate::types::{ChangePasswordRequest, MessageResponse, UserProfile};
use reqwest::Method;

impl SessionClient {
    /// Fetch the signed-in user's profile
    pub async fn profile(&self) -> Result<UserProfile, ClientError> {
        self.request::<(), _>(Method::GET, "/api/user/profile/", None)
            .await
    }

    /// Change the signed-in user's password
    pub async fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<MessageResponse, ClientError> {
        self.request(Method::POST, "/api/user/change-password/", Some(request))
            .await
    }
}
