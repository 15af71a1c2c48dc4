//! SyncHub Frontend App
//!
//! Root component: nav auth bar, auth modal and, on pages that carry
//! inventory data, the editable table.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AuthModal, InventoryTable, NavAuthBar};
use crate::config::PageConfig;
use crate::context::AppContext;
use crate::store::AuthState;

#[component]
pub fn App(config: PageConfig) -> impl IntoView {
    let inventory = config.inventory.clone();

    provide_context(AppContext::new(config));
    provide_context(Store::new(AuthState::load()));

    view! {
        <NavAuthBar />
        <AuthModal />
        {inventory.map(|inventory| {
            log::info!("[APP] inventory table with {} items", inventory.items.len());
            view! {
                <section id="inventory-app" class="inventory-section">
                    <InventoryTable inventory=inventory />
                </section>
            }
        })}
    }
}
