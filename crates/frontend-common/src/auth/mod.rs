//! Session context and expiry handling

pub mod context;
pub mod error_handler;

pub use context::{SessionContext, SessionProvider, use_session};
