#![allow(warnings)]
//! SyncHub Frontend Entry Point

mod models;
mod error;
mod config;
mod commands;
mod table;
mod auth;
mod context;
mod store;
mod components;
mod app;

use app::App;
use config::PageConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    // Installed before the page is read so config parse errors are kept
    if let Err(e) = rolling_logger::init(log::LevelFilter::Info, rolling_logger::DEFAULT_CAPACITY) {
        web_sys::console::warn_1(&format!("[APP] logger already installed: {}", e).into());
    }
    let config = PageConfig::from_document();
    rolling_logger::set_level(config.log_level);
    log::info!("[APP] starting on {}", config.endpoint);

    page_effects::bind_card_flips();
    page_effects::bind_password_toggles();
    page_effects::stagger_cards(".dashboard-card", 300, 200);
    if let Err(e) = page_effects::observe_fade_ins(page_effects::FADE_IN_SELECTOR, &Default::default()) {
        log::warn!("[APP] fade-in observer unavailable: {:?}", e);
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
