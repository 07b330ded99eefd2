//! Browser `localStorage` credential store, used by the web build.
//!
//! All methods silently swallow storage errors (private-browsing quota
//! denials, disabled storage). A failed write means the session simply does
//! not survive a reload; the authoritative session lives on the backend.

use crate::credentials::CredentialStore;

const TOKEN_KEY: &str = "fleetops-token";

/// Zero-size handle; `window.localStorage` is looked up on every call, the
/// browser caches the underlying object.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl CredentialStore for LocalStorageStore {
    fn get(&self) -> Option<String> {
        Self::storage()?.get_item(TOKEN_KEY).ok()?
    }

    fn set(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
