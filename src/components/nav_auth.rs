//! Nav Auth Bar Component
//!
//! Login/Sign Up buttons for visitors, profile and Logout once logged in.

use leptos::prelude::*;

use crate::auth::session;
use crate::auth::BrowserStorage;
use crate::config::LOGOUT_REDIRECT;
use crate::context::use_app_context;
use crate::store::{store_open_login, store_open_signup, store_refresh_session, use_auth_store, AuthStateStoreFields};

use super::auth_modal::OPEN_LOGIN_ID;

#[component]
pub fn NavAuthBar() -> impl IntoView {
    let store = use_auth_store();
    let app = use_app_context();
    let logged_in = move || store.session().with(|s| s.logged_in);

    let logout = move |_| {
        session::logout(&BrowserStorage);
        store_refresh_session(&store);
        log::info!("[AUTH] logged out");
        app.navigate(LOGOUT_REDIRECT);
    };

    view! {
        <div class="nav-auth">
            <Show
                when=logged_in
                fallback=move || view! {
                    <button
                        type="button"
                        id=OPEN_LOGIN_ID
                        class="nav-button"
                        on:click=move |ev| {
                            ev.prevent_default();
                            store_open_login(&store);
                        }
                    >
                        "Login"
                    </button>
                    <button
                        type="button"
                        id="openSignup"
                        class="nav-button"
                        on:click=move |ev| {
                            ev.prevent_default();
                            store_open_signup(&store);
                        }
                    >
                        "Sign Up"
                    </button>
                }
            >
                <div id="profile-info" class="profile-info">
                    {move || store.session().with(|s| s.avatar.clone()).map(|src| view! {
                        <img id="nav-avatar-img" class="nav-avatar" src=src alt="avatar" />
                    })}
                    <span id="nav-username-display">{move || store.session().with(|s| s.display_name.clone())}</span>
                </div>
                <button type="button" id="logoutBtn" class="nav-button" on:click=logout>
                    "Logout"
                </button>
            </Show>
        </div>
    }
}
