//! Auth State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the modal
//! and the local-storage session flags.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::auth::session::{self, SessionSnapshot};
use crate::auth::{BrowserStorage, ModalState};

#[derive(Clone, Debug, Default, Store)]
pub struct AuthState {
    pub modal: ModalState,
    /// Mirror of local storage, refreshed after every write
    pub session: SessionSnapshot,
    pub signup_busy: bool,
    pub login_busy: bool,
}

impl AuthState {
    pub fn load() -> Self {
        Self {
            session: session::snapshot(&BrowserStorage),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AuthStore = Store<AuthState>;

/// Get the auth store from context
pub fn use_auth_store() -> AuthStore {
    expect_context::<AuthStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_refresh_session(store: &AuthStore) {
    *store.session().write() = session::snapshot(&BrowserStorage);
}

pub fn store_open_login(store: &AuthStore) {
    let registered = session::is_registered(&BrowserStorage);
    store.modal().write().open_login(registered);
}

pub fn store_open_signup(store: &AuthStore) {
    store.modal().write().open_signup();
}

pub fn store_close_modal(store: &AuthStore) {
    store.modal().write().close();
}
