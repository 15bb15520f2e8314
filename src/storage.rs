//! Key-value storage used for session identifiers and preferences.
//!
//! The browser implementation goes through `window.localStorage`; tests use
//! [`MemoryStore`].

use std::cell::RefCell;
use std::collections::HashMap;

use tracing::warn;

pub const USER_ID_KEY: &str = "userId";
pub const TWIN_ID_KEY: &str = "twinId";
pub const API_BASE_KEY: &str = "apiBase";
pub const THEME_KEY: &str = "theme";

pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// `window.localStorage`. Every call is a no-op when storage is unavailable
/// (private mode, non-browser target).
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Some(s) = Self::storage() {
            if s.set_item(key, value).is_err() {
                warn!("Failed to write '{}' to local storage", key);
            }
        }
    }

    fn remove_item(&self, key: &str) {
        if let Some(s) = Self::storage() {
            if s.remove_item(key).is_err() {
                warn!("Failed to remove '{}' from local storage", key);
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.items.get_mut().insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_set_get_remove() {
        let store = MemoryStore::new().with(USER_ID_KEY, "7");
        assert_eq!(store.get_item(USER_ID_KEY), Some("7".to_string()));

        store.set_item(THEME_KEY, "dark");
        assert_eq!(store.get_item(THEME_KEY), Some("dark".to_string()));

        store.remove_item(USER_ID_KEY);
        assert!(store.get_item(USER_ID_KEY).is_none());
    }
}
