//! Client configuration and service wiring

use crate::storage::BrowserTokenStore;
use passage_core::{ApiConfig, SessionManager};
pub use passage_http::client::error::ClientError;
use passage_http::{AuthApiService, ClientBuilder, ProfileApiService, PublicClient};
use std::sync::Arc;
use tracing::{debug, warn};
use web_sys::window;

/// Settings document compiled into the bundle
const EMBEDDED_CONFIG: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/passage.toml"));

/// Build-time API base address, e.g. `PASSAGE_API_BASE=https://api.example.com trunk build`
const API_BASE_OVERRIDE: Option<&str> = option_env!("PASSAGE_API_BASE");

/// Resolve the API settings every request is built from
///
/// The embedded `passage.toml` is loaded first. A valid `PASSAGE_API_BASE`
/// set at build time replaces its base address. If the result is still
/// empty, requests go to the page's own origin.
pub fn api_config() -> ApiConfig {
    let embedded = ApiConfig::load(Some(EMBEDDED_CONFIG)).unwrap_or_else(|err| {
        warn!(error = %err, "ignoring embedded passage.toml");
        ApiConfig::default()
    });
    let config = API_BASE_OVERRIDE
        .map(ApiConfig::new)
        .filter(|config| match config.validate() {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "ignoring PASSAGE_API_BASE");
                false
            }
        })
        .unwrap_or(embedded);
    ApiConfig::new(resolve_base_url(&config, window_origin().as_deref()))
}

fn window_origin() -> Option<String> {
    window().and_then(|w| w.location().origin().ok())
}

fn resolve_base_url(config: &ApiConfig, origin: Option<&str>) -> String {
    let configured = config.normalized_base();
    if !configured.is_empty() {
        return configured.to_owned();
    }
    // Default to relative URLs
    origin.map(|o| o.trim_end_matches('/').to_owned()).unwrap_or_default()
}

/// Everything a view needs to talk to the API, created once at app start
#[derive(Clone)]
pub struct SessionServices {
    pub session: SessionManager,
    pub public: PublicClient,
    pub auth: AuthApiService,
    pub profile: ProfileApiService,
}

impl SessionServices {
    /// Wire the browser token store into both clients and the flow services
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        Self::with_session(
            config,
            SessionManager::new(Arc::new(BrowserTokenStore::new())),
        )
    }

    /// Wire services around an existing session
    pub fn with_session(config: &ApiConfig, session: SessionManager) -> Result<Self, ClientError> {
        debug!(base_url = config.normalized_base(), "wiring API services");
        let builder = ClientBuilder::from_config(config);
        let public = builder.clone().build_public()?;
        let authed = builder.build_session(session.clone())?;

        Ok(Self {
            auth: AuthApiService::new(public.clone(), session.clone()),
            profile: ProfileApiService::new(authed),
            public,
            session,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use passage_core::MemoryTokenStore;

    #[test]
    fn configured_base_wins_over_origin() {
        let config = ApiConfig::new("https://api.example.com/");
        assert_eq!(
            resolve_base_url(&config, Some("http://localhost:8080")),
            "https://api.example.com"
        );
    }

    #[test]
    fn empty_base_falls_back_to_origin() {
        assert_eq!(
            resolve_base_url(&ApiConfig::default(), Some("http://localhost:8080")),
            "http://localhost:8080"
        );
        assert_eq!(resolve_base_url(&ApiConfig::default(), None), "");
    }

    #[test]
    fn embedded_settings_load() {
        let config = ApiConfig::load(Some(EMBEDDED_CONFIG)).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(
            resolve_base_url(&config, Some("http://localhost:8080/")),
            "http://localhost:8080"
        );
    }

    #[test]
    fn services_share_one_session() {
        let session = SessionManager::new(Arc::new(MemoryTokenStore::with_tokens(
            Some("a"),
            Some("r"),
        )));
        let services =
            SessionServices::with_session(&ApiConfig::new("http://localhost:8000/"), session)
                .unwrap();

        services.auth.logout().unwrap();
        assert!(!services.session.is_established());
        assert_eq!(services.public.base_url(), "http://localhost:8000");
    }
}
