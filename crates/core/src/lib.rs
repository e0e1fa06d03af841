//! Passage core types and utilities
//!
//! Session credentials, the token store seam, access-token claim decoding,
//! the session guard state machine and client-side form validation. Nothing
//! in this crate touches the network or the browser.

pub mod clock;
pub mod config;
pub mod error;
pub mod guard;
pub mod session;
pub mod validation;

#[cfg(any(test, feature = "tests"))]
pub mod tests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ApiConfig, SessionKeys, UiTimings};
pub use error::{CoreError, CoreResult};
pub use guard::{CredentialRefresher, GuardState, RefreshedCredentials, SessionGuard};
pub use session::{
    MemoryTokenStore, SessionCredentials, SessionManager, StoredTokens, TokenStatus, TokenStore,
};
pub use validation::{
    ForgotPasswordForm, LoginForm, MIN_PASSWORD_LENGTH, PasswordChangeForm, RegistrationForm,
    ResetPasswordForm, ValidationError,
};
