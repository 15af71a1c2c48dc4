//! Session Flags
//!
//! Login state kept in local storage under the keys the server-rendered
//! pages read. No expiry; cleared on logout.

use gloo::storage::{LocalStorage, Storage};

use crate::auth::validation::is_valid_email;

pub const LOGGED_IN: &str = "loggedIn";
pub const USERNAME: &str = "username";
pub const EMAIL: &str = "email";
pub const AVATAR: &str = "avatar";
pub const REGISTERED: &str = "registered";

/// Raw string key/value storage
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`, values stored as plain strings
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl SessionStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = LocalStorage::raw().set_item(key, value) {
            log::warn!("[AUTH] could not store {}: {:?}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        if let Err(e) = LocalStorage::raw().remove_item(key) {
            log::warn!("[AUTH] could not remove {}: {:?}", key, e);
        }
    }
}

/// What the nav bar needs to render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub logged_in: bool,
    pub display_name: String,
    pub avatar: Option<String>,
    pub registered: bool,
}

pub fn snapshot(store: &impl SessionStore) -> SessionSnapshot {
    let logged_in = store.get(LOGGED_IN).as_deref() == Some("true");
    if !logged_in {
        return SessionSnapshot {
            registered: is_registered(store),
            ..Default::default()
        };
    }
    let display_name = store
        .get(USERNAME)
        .filter(|s| !s.is_empty())
        .or_else(|| store.get(EMAIL).filter(|s| !s.is_empty()))
        .unwrap_or_else(|| "User".to_string());
    SessionSnapshot {
        logged_in,
        display_name,
        avatar: store.get(AVATAR).filter(|s| !s.is_empty()),
        registered: is_registered(store),
    }
}

pub fn is_registered(store: &impl SessionStore) -> bool {
    store.get(REGISTERED).as_deref() == Some("true")
}

pub fn record_registered(store: &impl SessionStore) {
    store.set(REGISTERED, "true");
}

/// Identifiers that look like email addresses are kept under `email`
pub fn record_login(store: &impl SessionStore, identifier: &str) {
    store.set(LOGGED_IN, "true");
    if is_valid_email(identifier) {
        store.set(EMAIL, identifier);
        store.remove(USERNAME);
    } else {
        store.set(USERNAME, identifier);
        store.remove(EMAIL);
    }
}

pub fn logout(store: &impl SessionStore) {
    for key in [LOGGED_IN, USERNAME, AVATAR, EMAIL] {
        store.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore(RefCell<HashMap<String, String>>);

    impl SessionStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }
        fn set(&self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
        }
        fn remove(&self, key: &str) {
            self.0.borrow_mut().remove(key);
        }
    }

    #[test]
    fn test_logged_out_by_default() {
        let store = MemoryStore::default();
        assert_eq!(snapshot(&store), SessionSnapshot::default());
    }

    #[test]
    fn test_login_with_username() {
        let store = MemoryStore::default();
        store.set(EMAIL, "old@example.com");
        record_login(&store, "ana");
        let session = snapshot(&store);
        assert!(session.logged_in);
        assert_eq!(session.display_name, "ana");
        assert_eq!(store.get(EMAIL), None);
    }

    #[test]
    fn test_login_with_email() {
        let store = MemoryStore::default();
        store.set(USERNAME, "ana");
        record_login(&store, "ana@example.com");
        assert_eq!(store.get(USERNAME), None);
        assert_eq!(snapshot(&store).display_name, "ana@example.com");
    }

    #[test]
    fn test_display_name_fallback() {
        let store = MemoryStore::default();
        store.set(LOGGED_IN, "true");
        store.set(AVATAR, "/media/a.png");
        let session = snapshot(&store);
        assert_eq!(session.display_name, "User");
        assert_eq!(session.avatar.as_deref(), Some("/media/a.png"));
    }

    #[test]
    fn test_logout_keeps_registered_flag() {
        let store = MemoryStore::default();
        record_registered(&store);
        record_login(&store, "ana");
        store.set(AVATAR, "/media/a.png");
        logout(&store);
        let session = snapshot(&store);
        assert!(!session.logged_in);
        assert!(session.registered);
        assert_eq!(store.get(AVATAR), None);
        assert_eq!(store.get(USERNAME), None);
    }
}
