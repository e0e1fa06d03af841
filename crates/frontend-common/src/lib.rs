//! Browser glue shared by the Passage frontend
//!
//! The `localStorage` token store, service wiring, the session context
//! provider and a few small components every view uses.

pub mod auth;
pub mod client;
pub mod components;
pub mod logging;
pub mod services;
pub mod storage;

pub use auth::context::{SessionContext, SessionProvider, use_session};
pub use client::{SessionServices, api_config};
pub use components::{LoadingSpinner, NotificationProvider, Notifier, use_notify};
pub use storage::BrowserTokenStore;
