//! `localStorage` backed token store

use gloo::storage::{LocalStorage, Storage};
use passage_core::{CoreError, CoreResult, SessionKeys, StoredTokens, TokenStore};
use tracing::warn;
use wasm_bindgen::JsValue;

/// Keeps the credential pair under the `access` and `refresh` keys
///
/// Entries are shared by every tab of the origin; the last write wins.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserTokenStore;

impl BrowserTokenStore {
    pub fn new() -> Self {
        Self
    }

    fn get(key: &str) -> Option<String> {
        match LocalStorage::raw().get_item(key) {
            Ok(value) => value,
            Err(err) => {
                warn!(key, error = ?err, "localStorage read failed");
                None
            }
        }
    }

    fn set(key: &str, value: &str) -> CoreResult<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| storage_error("write", key, &err))
    }

    fn remove(key: &str) -> CoreResult<()> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|err| storage_error("remove", key, &err))
    }
}

fn storage_error(op: &str, key: &str, err: &JsValue) -> CoreError {
    let detail = err.as_string().unwrap_or_else(|| format!("{err:?}"));
    CoreError::storage(format!("localStorage {op} of '{key}' failed: {detail}"))
}

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> StoredTokens {
        StoredTokens {
            access: Self::get(SessionKeys::ACCESS),
            refresh: Self::get(SessionKeys::REFRESH),
        }
    }

    fn save(&self, access: &str, refresh: &str) -> CoreResult<()> {
        Self::set(SessionKeys::ACCESS, access)?;
        Self::set(SessionKeys::REFRESH, refresh)
    }

    fn save_access(&self, access: &str) -> CoreResult<()> {
        Self::set(SessionKeys::ACCESS, access)
    }

    fn clear(&self) -> CoreResult<()> {
        // Attempt both removals even if the first fails
        let access = Self::remove(SessionKeys::ACCESS);
        let refresh = Self::remove(SessionKeys::REFRESH);
        access.and(refresh)
    }
}
