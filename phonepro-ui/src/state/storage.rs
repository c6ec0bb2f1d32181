//! Local Storage
//!
//! `window.localStorage` as a [`SessionStore`].

use phonepro::{SessionError, SessionStore};
use web_sys::Storage;

/// Session store over the browser's local storage
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage(&self) -> Result<Storage, SessionError> {
        web_sys::window()
            .ok_or_else(|| SessionError::Unavailable("no window".to_string()))?
            .local_storage()
            .map_err(|e| SessionError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| SessionError::Unavailable("local storage disabled".to_string()))
    }
}

impl SessionStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| SessionError::Unavailable(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| SessionError::Unavailable(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| SessionError::Unavailable(format!("{:?}", e)))
    }
}
