//! Session Persistence
//!
//! The signed-in identity is a single username string, held in memory and
//! mirrored to a durable key/value store under [`SESSION_KEY`].

use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;

/// Durable storage key holding the signed-in username
pub const SESSION_KEY: &str = "phonepro_username";

/// Narrow key/value interface over durable client storage
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<(), SessionError>;
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        (**self).remove(key)
    }
}

/// Errors from a durable store
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session storage unavailable: {0}")]
    Unavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Volatile store, used by tests and when no durable storage exists
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| SessionError::Unavailable(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| SessionError::Unavailable(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| SessionError::Unavailable(e.to_string()))?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(feature = "native")]
pub use file_store::FileStore;

#[cfg(feature = "native")]
mod file_store {
    use super::{SessionError, SessionStore};
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    /// One plain-text file per key inside a directory
    #[derive(Debug, Clone)]
    pub struct FileStore {
        dir: PathBuf,
    }

    impl FileStore {
        pub fn new(dir: impl Into<PathBuf>) -> Self {
            Self { dir: dir.into() }
        }

        pub fn dir(&self) -> &Path {
            &self.dir
        }

        fn path(&self, key: &str) -> PathBuf {
            self.dir.join(key)
        }
    }

    impl SessionStore for FileStore {
        fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
            match std::fs::read_to_string(self.path(key)) {
                Ok(value) => Ok(Some(value)),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
                Err(e) => Err(e.into()),
            }
        }

        fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
            std::fs::create_dir_all(&self.dir)?;
            std::fs::write(self.path(key), value)?;
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<(), SessionError> {
            match std::fs::remove_file(self.path(key)) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e.into()),
            }
        }
    }
}

/// Which top-level view the shell renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<'a> {
    Auth,
    Application { username: &'a str },
}

/// Signed-in identity for the application shell
///
/// Two states only: signed out (`username` is `None`) and signed in.
pub struct Session<S> {
    store: S,
    username: Option<String>,
}

impl<S: SessionStore> Session<S> {
    /// Restore a previously persisted identity, if any
    pub fn restore(store: S) -> Self {
        let username = match store.get(SESSION_KEY) {
            Ok(saved) => saved.filter(|name| !name.is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read persisted session");
                None
            }
        };

        if let Some(name) = &username {
            tracing::info!(username = %name, "Restored session");
        }

        Self { store, username }
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.username.is_some()
    }

    pub fn view(&self) -> View<'_> {
        match &self.username {
            Some(username) => View::Application { username },
            None => View::Auth,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Record a successful login in memory and in durable storage.
    ///
    /// The in-memory identity is set even if the durable write fails.
    pub fn authenticated(&mut self, username: &str) -> Result<(), SessionError> {
        tracing::info!(username = %username, "Signed in");
        self.username = Some(username.to_string());
        self.store.set(SESSION_KEY, username)
    }

    /// Clear the identity from memory and durable storage
    pub fn logout(&mut self) -> Result<(), SessionError> {
        if let Some(name) = self.username.take() {
            tracing::info!(username = %name, "Signed out");
        }
        self.store.remove(SESSION_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_without_saved_identity() {
        let session = Session::restore(MemoryStore::new());
        assert_eq!(session.view(), View::Auth);
        assert!(!session.is_signed_in());
    }

    #[test]
    fn test_restore_saved_identity() {
        let store = MemoryStore::new();
        store.set(SESSION_KEY, "alice").unwrap();

        let session = Session::restore(store);
        assert_eq!(session.view(), View::Application { username: "alice" });
    }

    #[test]
    fn test_restore_ignores_empty_value() {
        let store = MemoryStore::new();
        store.set(SESSION_KEY, "").unwrap();

        let session = Session::restore(store);
        assert_eq!(session.username(), None);
    }

    #[test]
    fn test_authenticated_then_logout() {
        let store = MemoryStore::new();
        let mut session = Session::restore(&store);

        session.authenticated("bob").unwrap();
        assert_eq!(session.username(), Some("bob"));
        assert_eq!(store.get(SESSION_KEY).unwrap().as_deref(), Some("bob"));

        session.logout().unwrap();
        assert_eq!(session.view(), View::Auth);
        assert_eq!(store.get(SESSION_KEY).unwrap(), None);
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested"));

        assert_eq!(store.get(SESSION_KEY).unwrap(), None);
        store.remove(SESSION_KEY).unwrap();

        store.set(SESSION_KEY, "carol").unwrap();
        assert_eq!(store.get(SESSION_KEY).unwrap().as_deref(), Some("carol"));

        let restored = Session::restore(FileStore::new(dir.path().join("nested")));
        assert_eq!(restored.username(), Some("carol"));

        store.remove(SESSION_KEY).unwrap();
        assert_eq!(store.get(SESSION_KEY).unwrap(), None);
    }
}
