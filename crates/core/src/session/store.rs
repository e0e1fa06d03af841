//! Token store seam and an in-memory implementation

use crate::error::{CoreError, CoreResult};
use std::sync::Mutex;

/// Raw persisted entries. Each one may be missing independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredTokens {
    pub access: Option<String>,
    pub refresh: Option<String>,
}

/// Synchronous key-value persistence for the two session credentials
///
/// Implementations do no expiry tracking; expiry is derived from the access
/// token's own claims.
pub trait TokenStore: Send + Sync {
    /// Read both entries
    fn load(&self) -> StoredTokens;

    /// Write both entries
    fn save(&self, access: &str, refresh: &str) -> CoreResult<()>;

    /// Overwrite only the access entry
    fn save_access(&self, access: &str) -> CoreResult<()>;

    /// Remove both entries
    fn clear(&self) -> CoreResult<()>;
}

/// Process-local token store
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: Mutex<StoredTokens>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from pre-populated entries
    pub fn with_tokens(access: Option<&str>, refresh: Option<&str>) -> Self {
        Self {
            entries: Mutex::new(StoredTokens {
                access: access.map(str::to_owned),
                refresh: refresh.map(str::to_owned),
            }),
        }
    }

    fn with_entries<T>(&self, f: impl FnOnce(&mut StoredTokens) -> T) -> CoreResult<T> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| CoreError::storage("token store lock poisoned"))?;
        Ok(f(&mut entries))
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> StoredTokens {
        self.with_entries(|entries| entries.clone())
            .unwrap_or_default()
    }

    fn save(&self, access: &str, refresh: &str) -> CoreResult<()> {
        self.with_entries(|entries| {
            entries.access = Some(access.to_owned());
            entries.refresh = Some(refresh.to_owned());
        })
    }

    fn save_access(&self, access: &str) -> CoreResult<()> {
        self.with_entries(|entries| entries.access = Some(access.to_owned()))
    }

    fn clear(&self) -> CoreResult<()> {
        self.with_entries(|entries| *entries = StoredTokens::default())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_returns_both_entries() {
        let store = MemoryTokenStore::new();
        store.save("a", "r").unwrap();
        assert_eq!(
            store.load(),
            StoredTokens {
                access: Some("a".into()),
                refresh: Some("r".into()),
            }
        );
    }

    #[test]
    fn save_access_keeps_refresh() {
        let store = MemoryTokenStore::with_tokens(Some("old"), Some("r"));
        store.save_access("new").unwrap();
        let tokens = store.load();
        assert_eq!(tokens.access.as_deref(), Some("new"));
        assert_eq!(tokens.refresh.as_deref(), Some("r"));
    }

    #[test]
    fn clear_removes_everything() {
        let store = MemoryTokenStore::with_tokens(Some("a"), Some("r"));
        store.clear().unwrap();
        assert_eq!(store.load(), StoredTokens::default());
    }
}
