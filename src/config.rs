//! Page Configuration
//!
//! Everything the app needs from the server-rendered document, read once at
//! startup.

use log::LevelFilter;
use wasm_bindgen::JsCast;

use crate::models::Item;

pub const SIGNUP_URL: &str = "/api/signup";
pub const LOGIN_URL: &str = "/api/login";
pub const DASHBOARD_URL: &str = "/dashboard/";
pub const LOGOUT_REDIRECT: &str = "/";

/// Id of the `<script type="application/json">` holding the table rows
pub const INVENTORY_DATA_ID: &str = "inventory-data";

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryConfig {
    pub items: Vec<Item>,
    /// Variant with the editable location column
    pub show_location: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    /// CRUD endpoint; the current page URL
    pub endpoint: String,
    pub csrf_token: Option<String>,
    /// None when the page has no inventory table
    pub inventory: Option<InventoryConfig>,
    pub log_level: LevelFilter,
}

/// Strings pulled out of the document, before interpretation
#[derive(Debug, Clone, Default)]
pub struct RawPage {
    pub href: String,
    pub csrf_input: Option<String>,
    pub csrf_meta: Option<String>,
    pub items_json: Option<String>,
    pub show_location: Option<String>,
    pub log_level: Option<String>,
}

impl PageConfig {
    pub fn from_raw(raw: RawPage) -> Self {
        let csrf_token = raw
            .csrf_input
            .or(raw.csrf_meta)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        let inventory = raw.items_json.map(|json| {
            let items = match serde_json::from_str::<Vec<Item>>(&json) {
                Ok(items) => items,
                Err(e) => {
                    log::error!("[CONFIG] inventory data is not valid JSON: {}", e);
                    Vec::new()
                }
            };
            InventoryConfig {
                items,
                show_location: raw.show_location.as_deref() == Some("true"),
            }
        });

        let log_level = raw
            .log_level
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(LevelFilter::Info);

        Self { endpoint: raw.href, csrf_token, inventory, log_level }
    }

    pub fn from_document() -> Self {
        Self::from_raw(read_document())
    }
}

fn read_document() -> RawPage {
    let Some(window) = web_sys::window() else {
        return RawPage::default();
    };
    let href = window.location().href().unwrap_or_default();
    let Some(document) = window.document() else {
        return RawPage { href, ..Default::default() };
    };

    let csrf_input = document
        .query_selector("[name=csrfmiddlewaretoken]")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value());
    let csrf_meta = document
        .query_selector("meta[name=csrf-token]")
        .ok()
        .flatten()
        .and_then(|el| el.get_attribute("content"));

    let data = document.get_element_by_id(INVENTORY_DATA_ID);
    let items_json = data.as_ref().and_then(|el| el.text_content());
    let show_location = data.as_ref().and_then(|el| el.get_attribute("data-show-location"));
    let log_level = document.body().and_then(|body| body.get_attribute("data-log-level"));

    RawPage { href, csrf_input, csrf_meta, items_json, show_location, log_level }
}
