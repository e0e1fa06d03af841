//! Session guard for protected views
//!
//! A guard is built on every mount of a protected view and evaluated once.
//! It moves `Unknown -> Checking`, then either straight to a verdict or via
//! `Refreshing` when the access credential has expired:
//!
//! ```text
//! Unknown -> Checking -> Authorized
//!                     -> Unauthorized
//!                     -> Refreshing -> Authorized
//!                                   -> Unauthorized
//! ```
//!
//! `Authorized` and `Unauthorized` are terminal for the instance. Reaching
//! `Unauthorized` tears the session down.

use crate::clock::Clock;
use crate::error::CoreResult;
use crate::session::{SessionManager, TokenStatus, expiry_status};
use async_trait::async_trait;
use std::fmt;
use tracing::{debug, warn};

/// Guard lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Unknown,
    Checking,
    Authorized,
    Refreshing,
    Unauthorized,
}

impl GuardState {
    /// Whether evaluation has reached a verdict
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Authorized | Self::Unauthorized)
    }
}

impl fmt::Display for GuardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "unknown",
            Self::Checking => "checking",
            Self::Authorized => "authorized",
            Self::Refreshing => "refreshing",
            Self::Unauthorized => "unauthorized",
        };
        f.write_str(name)
    }
}

/// New credentials returned by a successful refresh
#[derive(Clone, PartialEq, Eq)]
pub struct RefreshedCredentials {
    pub access: String,
    /// Present when the server rotates refresh credentials
    pub refresh: Option<String>,
}

impl fmt::Debug for RefreshedCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefreshedCredentials")
            .field("rotated", &self.refresh.is_some())
            .finish_non_exhaustive()
    }
}

/// Exchanges a refresh credential for a new access credential
#[async_trait(?Send)]
pub trait CredentialRefresher {
    async fn refresh(&self, refresh_token: &str) -> CoreResult<RefreshedCredentials>;
}

/// One-shot evaluator deciding whether a protected view may render
pub struct SessionGuard<C> {
    session: SessionManager,
    clock: C,
    state: GuardState,
}

impl<C: Clock> SessionGuard<C> {
    pub fn new(session: SessionManager, clock: C) -> Self {
        Self {
            session,
            clock,
            state: GuardState::Unknown,
        }
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Mark the guarded view as mounted
    pub fn begin(&mut self) -> GuardState {
        if self.state == GuardState::Unknown {
            self.transition(GuardState::Checking, &mut |_| {});
        }
        self.state
    }

    /// Run the guard to a verdict
    pub async fn evaluate<R>(&mut self, refresher: &R) -> GuardState
    where
        R: CredentialRefresher + ?Sized,
    {
        self.evaluate_observed(refresher, |_| {}).await
    }

    /// Run the guard to a verdict, reporting every state entered to `observe`
    pub async fn evaluate_observed<R, F>(&mut self, refresher: &R, mut observe: F) -> GuardState
    where
        R: CredentialRefresher + ?Sized,
        F: FnMut(GuardState),
    {
        if self.state.is_terminal() {
            return self.state;
        }
        if self.state == GuardState::Unknown {
            self.transition(GuardState::Checking, &mut observe);
        }

        let Some(credentials) = self.session.credentials() else {
            debug!("no session credentials");
            return self.deny(&mut observe);
        };

        match expiry_status(&credentials.access, self.clock.now()) {
            TokenStatus::Valid { expires_at } => {
                debug!(expires_at, "access credential still valid");
                self.transition(GuardState::Authorized, &mut observe);
                return self.state;
            }
            TokenStatus::Expired | TokenStatus::Malformed => {
                self.transition(GuardState::Refreshing, &mut observe);
            }
        }

        let refreshed = match refresher.refresh(&credentials.refresh).await {
            Ok(refreshed) => refreshed,
            Err(err) => {
                warn!(error = %err, "session refresh failed");
                return self.deny(&mut observe);
            }
        };

        if let Err(err) = self
            .session
            .update_access(&refreshed.access, refreshed.refresh.as_deref())
        {
            warn!(error = %err, "could not persist refreshed credential");
            return self.deny(&mut observe);
        }

        self.transition(GuardState::Authorized, &mut observe);
        self.state
    }

    fn deny(&mut self, observe: &mut dyn FnMut(GuardState)) -> GuardState {
        if let Err(err) = self.session.teardown() {
            warn!(error = %err, "could not clear session credentials");
        }
        self.transition(GuardState::Unauthorized, observe);
        self.state
    }

    fn transition(&mut self, next: GuardState, observe: &mut dyn FnMut(GuardState)) {
        debug!(from = %self.state, to = %next, "session guard transition");
        self.state = next;
        observe(next);
    }
}
