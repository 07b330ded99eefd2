use std::fs;
use std::path::PathBuf;

use crate::credentials::CredentialStore;

/// File-backed credential store for native builds. The token lives in a
/// single file next to `fleetops.toml` in the user config directory.
///
/// All I/O failures degrade to "no stored credential": a missing directory,
/// unreadable file, or full disk means the user re-authenticates.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

const TOKEN_FILE: &str = "token";

impl FileStore {
    /// Store the token under `<config_dir>/fleetops/token`, falling back to
    /// the current directory when the platform has no config dir.
    pub fn in_config_dir() -> Self {
        let dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fleetops");
        Self::at(dir.join(TOKEN_FILE))
    }

    /// Store the token at an explicit path (used by tests).
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CredentialStore for FileStore {
    fn get(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    fn set(&self, token: &str) {
        if let Some(parent) = self.path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        let _ = fs::write(&self.path, token);
    }

    fn clear(&self) {
        let _ = fs::remove_file(&self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_in_temp_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::at(dir.path().join("nested").join("token"));

        assert!(store.get().is_none());
        store.set("bearer-abc");
        assert_eq!(store.get().as_deref(), Some("bearer-abc"));

        store.clear();
        assert!(store.get().is_none());
    }

    #[test]
    fn test_whitespace_only_file_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        fs::write(&path, "\n  \n").unwrap();
        let store = FileStore::at(path);
        assert!(store.get().is_none());
    }

    #[test]
    fn test_trailing_newline_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        fs::write(&path, "tok-9\n").unwrap();
        let store = FileStore::at(path);
        assert_eq!(store.get().as_deref(), Some("tok-9"));
    }
}
