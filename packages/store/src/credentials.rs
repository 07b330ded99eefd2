//! Bearer-credential storage.
//!
//! The session token is the only thing the client persists. The trait is
//! deliberately narrow (get/set/clear) and implementations degrade to "no
//! stored credential" on storage failure rather than surfacing errors: a
//! broken store means the user signs in again, nothing worse.

use std::sync::{Arc, Mutex};

/// Persistent storage for the bearer token.
pub trait CredentialStore: Send + Sync {
    /// The stored token, if any.
    fn get(&self) -> Option<String>;
    /// Store a token, replacing any previous one.
    fn set(&self, token: &str);
    /// Remove the stored token.
    fn clear(&self);
}

/// In-process store for tests and ephemeral sessions.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.token.lock().ok()?.clone()
    }

    fn set(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}

/// Platform-default credential store: browser localStorage on web builds, a
/// file under the user config dir elsewhere.
pub fn default_credential_store() -> Arc<dyn CredentialStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Arc::new(crate::web_storage::LocalStorageStore::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        Arc::new(MemoryStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(crate::file_store::FileStore::in_config_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_set_get_clear() {
        let store = MemoryStore::new();
        assert!(store.get().is_none());

        store.set("tok-1");
        assert_eq!(store.get().as_deref(), Some("tok-1"));

        store.set("tok-2");
        assert_eq!(store.get().as_deref(), Some("tok-2"));

        store.clear();
        assert!(store.get().is_none());
    }

    #[test]
    fn test_memory_store_clones_share_state() {
        let store = MemoryStore::new();
        let view = store.clone();
        store.set("shared");
        assert_eq!(view.get().as_deref(), Some("shared"));
    }
}
