//! Client configuration
//!
//! The API base address is the only runtime setting. It is read from an
//! optional TOML document and `PASSAGE__*` environment overrides, e.g.
//! `PASSAGE__API__BASE_URL=https://api.example.com`.

use crate::error::{CoreError, CoreResult};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Storage keys for the persisted credentials
pub struct SessionKeys;

impl SessionKeys {
    /// `localStorage` entry holding the access credential
    pub const ACCESS: &'static str = "access";

    /// `localStorage` entry holding the refresh credential
    pub const REFRESH: &'static str = "refresh";
}

/// Fixed UI delays
pub struct UiTimings;

impl UiTimings {
    /// How long a toast notification stays visible
    pub const NOTIFICATION_TIMEOUT_MS: u32 = 3_000;

    /// Delay between a successful password reset and the redirect to login
    pub const RESET_REDIRECT_DELAY_MS: u32 = 2_000;

    /// Delay before the change-password dialog closes after success
    pub const PASSWORD_DIALOG_CLOSE_MS: u32 = 2_000;
}

/// Remote API settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ApiConfig {
    /// Base address every endpoint path is joined to. Empty means same origin.
    pub base_url: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Settings {
    api: ApiConfig,
}

impl ApiConfig {
    /// Create a config for the given base address
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Load from a TOML document, then apply `PASSAGE__` environment overrides
    pub fn load(toml: Option<&str>) -> CoreResult<Self> {
        let mut builder = Config::builder();
        if let Some(toml) = toml {
            builder = builder.add_source(File::from_str(toml, FileFormat::Toml));
        }
        let settings: Settings = builder
            .add_source(Environment::with_prefix("PASSAGE").separator("__"))
            .build()?
            .try_deserialize()?;

        settings.api.validate()?;
        Ok(settings.api)
    }

    /// Check that the base address is empty or an absolute http(s) URL
    pub fn validate(&self) -> CoreResult<()> {
        if self.base_url.trim().is_empty() {
            return Ok(());
        }
        let url = url::Url::parse(&self.base_url)
            .map_err(|e| CoreError::invalid_config(format!("api.base_url: invalid URL - {e}")))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(CoreError::invalid_config(format!(
                "api.base_url: unsupported scheme '{other}'"
            ))),
        }
    }

    /// Base address without a trailing slash
    pub fn normalized_base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
