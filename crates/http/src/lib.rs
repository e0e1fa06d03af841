//! Passage HTTP module
//!
//! Wire types for the account API, a typed reqwest client that owns the
//! bearer/refresh round-trip, and the flow services the views call into.

pub mod types;

#[cfg(feature = "client")]
pub mod client;
#[cfg(feature = "client")]
pub mod services;

#[cfg(feature = "client")]
pub use client::{ClientBuilder, PublicClient, SessionClient, error::ClientError};
#[cfg(feature = "client")]
pub use services::{AuthApiService, FlowError, ProfileApiService};
