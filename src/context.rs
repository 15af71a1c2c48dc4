//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::PageConfig;

/// Page-level configuration and navigation, provided once by `App`
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<PageConfig>,
}

impl AppContext {
    pub fn new(config: PageConfig) -> Self {
        Self { config: StoredValue::new(config) }
    }

    /// CRUD endpoint for the inventory table
    pub fn endpoint(&self) -> String {
        self.config.with_value(|c| c.endpoint.clone())
    }

    pub fn csrf_token(&self) -> Option<String> {
        self.config.with_value(|c| c.csrf_token.clone())
    }

    /// Full page reload, used when the server computed new fields
    pub fn reload(&self) {
        let Some(window) = web_sys::window() else { return };
        if let Err(e) = window.location().reload() {
            log::error!("[APP] reload failed: {:?}", e);
        }
    }

    pub fn navigate(&self, url: &str) {
        let Some(window) = web_sys::window() else { return };
        if let Err(e) = window.location().set_href(url) {
            log::error!("[APP] navigation to {} failed: {:?}", url, e);
        }
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
