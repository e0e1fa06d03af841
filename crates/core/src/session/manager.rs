//! The single entry point for reading and mutating session credentials

use super::{SessionCredentials, TokenStore};
use crate::error::CoreResult;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Session context shared by the HTTP client, the guard and the views
///
/// Created once at app start; every credential read or write goes through it.
#[derive(Clone)]
pub struct SessionManager {
    store: Arc<dyn TokenStore>,
}

impl fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionManager").finish_non_exhaustive()
    }
}

impl SessionManager {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// The credential pair, or `None` unless both entries are present
    pub fn credentials(&self) -> Option<SessionCredentials> {
        let tokens = self.store.load();
        let access = tokens.access.filter(|t| !t.is_empty());
        let refresh = tokens.refresh.filter(|t| !t.is_empty());

        match (access, refresh) {
            (Some(access), Some(refresh)) => Some(SessionCredentials { access, refresh }),
            (None, None) => None,
            (access, _) => {
                warn!(
                    has_access = access.is_some(),
                    "partial credential pair in storage, treating session as absent"
                );
                None
            }
        }
    }

    /// Current access credential as stored, without pair validation
    pub fn access_token(&self) -> Option<String> {
        self.store.load().access.filter(|t| !t.is_empty())
    }

    /// Current refresh credential as stored, without pair validation
    pub fn refresh_token(&self) -> Option<String> {
        self.store.load().refresh.filter(|t| !t.is_empty())
    }

    /// Whether a well-formed pair is stored
    pub fn is_established(&self) -> bool {
        self.credentials().is_some()
    }

    /// Persist a new pair after login
    pub fn establish(&self, credentials: &SessionCredentials) -> CoreResult<()> {
        debug!("establishing session");
        self.store.save(&credentials.access, &credentials.refresh)
    }

    /// Persist a refreshed access credential, and a rotated refresh credential if given
    pub fn update_access(&self, access: &str, refresh: Option<&str>) -> CoreResult<()> {
        match refresh {
            Some(refresh) => self.store.save(access, refresh),
            None => self.store.save_access(access),
        }
    }

    /// Remove both credentials
    pub fn teardown(&self) -> CoreResult<()> {
        debug!("tearing down session");
        self.store.clear()
    }
}
