//! Session credentials and their persistence

pub mod claims;
pub mod manager;
pub mod store;

pub use claims::{AccessClaims, TokenStatus, decode_claims, expiry_status};
pub use manager::SessionManager;
pub use store::{MemoryTokenStore, StoredTokens, TokenStore};

use std::fmt;

/// A well-formed session: both credentials present
#[derive(Clone, PartialEq, Eq)]
pub struct SessionCredentials {
    /// Short-lived bearer token carrying an `exp` claim
    pub access: String,
    /// Longer-lived token exchanged for a new access credential
    pub refresh: String,
}

impl SessionCredentials {
    pub fn new(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self {
            access: access.into(),
            refresh: refresh.into(),
        }
    }
}

impl fmt::Debug for SessionCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionCredentials")
            .field("access", &"<redacted>")
            .field("refresh", &"<redacted>")
            .finish()
    }
}
