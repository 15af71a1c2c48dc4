//! Auth Modal Component
//!
//! Login and signup forms in one overlay. The signup panel slides in by
//! putting `active` on `.form_container`.

use gloo::dialogs;
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::auth::session;
use crate::auth::{message_for, AuthField, AuthPanel, BrowserStorage, FieldErrors, LoginForm, SignupForm};
use crate::commands;
use crate::config::{DASHBOARD_URL, LOGIN_URL, SIGNUP_URL};
use crate::context::use_app_context;
use crate::store::{
    store_close_modal, store_open_signup, store_refresh_session, use_auth_store, AuthStateStoreFields, AuthStore,
};

/// Id of the nav button that opens the login panel
pub const OPEN_LOGIN_ID: &str = "openLogin";

fn focus_element(id: &str) {
    if let Some(el) = document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = el.focus();
    }
}

/// Close the overlay and hand focus back to the nav bar
fn close_modal(store: &AuthStore) {
    store_close_modal(store);
    focus_element(OPEN_LOGIN_ID);
}

#[component]
pub fn AuthModal() -> impl IntoView {
    let store = use_auth_store();
    let app = use_app_context();

    let signup = RwSignal::new(SignupForm::default());
    let login = RwSignal::new(LoginForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let first_login_input = NodeRef::<Input>::new();
    let first_signup_input = NodeRef::<Input>::new();

    let panel = move || store.modal().get().panel();
    let signup_prompt = move || store.modal().get().signup_prompt();

    // Focus the first field of whichever panel was just shown
    Effect::new(move |_| {
        let target = match panel() {
            AuthPanel::Closed => return,
            AuthPanel::Login => first_login_input.get(),
            AuthPanel::Signup => first_signup_input.get(),
        };
        errors.set(Vec::new());
        if let Some(input) = target {
            let _ = input.focus();
        }
    });

    let escape = window_event_listener(leptos::ev::keydown, move |ev| {
        let key = ev.key();
        if (key == "Escape" || key == "Esc") && store.modal().get_untracked().is_open() {
            close_modal(&store);
        }
    });
    on_cleanup(move || escape.remove());

    let error = move |field: AuthField| Signal::derive(move || errors.with(|e| message_for(e, field).unwrap_or_default()));

    let on_signup = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store.signup_busy().get_untracked() {
            return;
        }
        let args = match signup.get_untracked().validate() {
            Ok(args) => args,
            Err(found) => {
                errors.set(found);
                return;
            }
        };
        errors.set(Vec::new());
        *store.signup_busy().write() = true;
        let csrf_token = app.csrf_token();

        spawn_local(async move {
            let result = commands::signup(SIGNUP_URL, csrf_token.as_deref(), &args).await;
            *store.signup_busy().write() = false;
            match result {
                Ok(reply) => {
                    dialogs::alert(&reply.message);
                    if reply.ok {
                        log::info!("[AUTH] signed up {}", args.username);
                        session::record_registered(&BrowserStorage);
                        store_refresh_session(&store);
                        login.set(LoginForm { identifier: args.username, password: args.password });
                        signup.set(SignupForm::default());
                        store.modal().write().switch_to_login();
                    }
                }
                Err(e) => {
                    log::error!("[AUTH] signup request failed: {}", e);
                    dialogs::alert(&format!("Error: {}", e));
                }
            }
        });
    };

    let on_login = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store.login_busy().get_untracked() {
            return;
        }
        let args = match login.get_untracked().validate() {
            Ok(args) => args,
            Err(found) => {
                errors.set(found);
                return;
            }
        };
        errors.set(Vec::new());
        *store.login_busy().write() = true;
        let csrf_token = app.csrf_token();

        spawn_local(async move {
            let result = commands::login(LOGIN_URL, csrf_token.as_deref(), &args).await;
            *store.login_busy().write() = false;
            match result {
                Ok(reply) => {
                    dialogs::alert(&reply.message);
                    if reply.ok {
                        log::info!("[AUTH] logged in as {}", args.identifier);
                        session::record_login(&BrowserStorage, &args.identifier);
                        store_refresh_session(&store);
                        store_close_modal(&store);
                        app.navigate(DASHBOARD_URL);
                    }
                }
                Err(e) => {
                    log::error!("[AUTH] login request failed: {}", e);
                    dialogs::alert(&format!("Error: {}", e));
                }
            }
        });
    };

    view! {
        <section
            class="home"
            style:display=move || if panel() == AuthPanel::Closed { "none" } else { "flex" }
            on:click=move |_| close_modal(&store)
        >
            <div
                class="form_container"
                class:active=move || panel() == AuthPanel::Signup
                on:click=|ev| ev.stop_propagation()
            >
                <button type="button" class="form_close" aria-label="Close" on:click=move |_| close_modal(&store)>
                    "×"
                </button>

                <div class="form login_form" aria-hidden=move || (panel() != AuthPanel::Login).to_string()>
                    <form id="loginForm" novalidate on:submit=on_login>
                        <h2>"Login"</h2>
                        <p id="login_signup_prompt" class:hidden=move || !signup_prompt()>
                            "New here? "
                            <a href="#" id="goToSignup" on:click=move |ev| {
                                ev.prevent_default();
                                store_open_signup(&store);
                            }>
                                "Sign up first"
                            </a>
                        </p>
                        <InputBox
                            id="login_identifier"
                            placeholder="Username or email"
                            value=Signal::derive(move || login.with(|f| f.identifier.clone()))
                            on_input=Callback::new(move |v| login.update(|f| f.identifier = v))
                            error=error(AuthField::Identifier)
                            input_ref=first_login_input
                        />
                        <InputBox
                            id="login_password"
                            placeholder="Password"
                            password=true
                            value=Signal::derive(move || login.with(|f| f.password.clone()))
                            on_input=Callback::new(move |v| login.update(|f| f.password = v))
                            error=error(AuthField::LoginPassword)
                        />
                        <button type="submit" class="button" disabled=move || store.login_busy().get()>
                            {move || if store.login_busy().get() { "Logging in..." } else { "Login Now" }}
                        </button>
                        <div class="login_signup">
                            "Don't have an account? "
                            <a href="#" id="signup" on:click=move |ev| {
                                ev.prevent_default();
                                store_open_signup(&store);
                            }>
                                "Signup"
                            </a>
                        </div>
                    </form>
                </div>

                <div class="form signup_form" aria-hidden=move || (panel() != AuthPanel::Signup).to_string()>
                    <form id="signupForm" novalidate on:submit=on_signup>
                        <h2>"Signup"</h2>
                        <InputBox
                            id="signup_username"
                            placeholder="Username"
                            value=Signal::derive(move || signup.with(|f| f.username.clone()))
                            on_input=Callback::new(move |v| signup.update(|f| f.username = v))
                            error=error(AuthField::Username)
                            input_ref=first_signup_input
                        />
                        <InputBox
                            id="signup_email"
                            input_type="email"
                            placeholder="Email"
                            value=Signal::derive(move || signup.with(|f| f.email.clone()))
                            on_input=Callback::new(move |v| signup.update(|f| f.email = v))
                            error=error(AuthField::Email)
                        />
                        <InputBox
                            id="signup_password"
                            placeholder="Password"
                            password=true
                            value=Signal::derive(move || signup.with(|f| f.password.clone()))
                            on_input=Callback::new(move |v| signup.update(|f| f.password = v))
                            error=error(AuthField::Password)
                        />
                        <InputBox
                            id="confirm_password"
                            placeholder="Confirm password"
                            password=true
                            value=Signal::derive(move || signup.with(|f| f.confirm.clone()))
                            on_input=Callback::new(move |v| signup.update(|f| f.confirm = v))
                            error=error(AuthField::ConfirmPassword)
                        />
                        <button type="submit" class="button" disabled=move || store.signup_busy().get()>
                            {move || if store.signup_busy().get() { "Signing up..." } else { "Sign Up Now" }}
                        </button>
                        <div class="login_signup">
                            "Already have an account? "
                            <a href="#" id="login" on:click=move |ev| {
                                ev.prevent_default();
                                store.modal().write().switch_to_login();
                            }>
                                "Login"
                            </a>
                        </div>
                    </form>
                </div>
            </div>
        </section>
    }
}

/// Labelled input with its inline error slot and, for passwords, a
/// show/hide toggle
#[component]
fn InputBox(
    #[prop(into)] id: String,
    #[prop(into)] placeholder: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] error: Signal<&'static str>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] password: bool,
    #[prop(optional)] input_ref: Option<NodeRef<Input>>,
) -> impl IntoView {
    let input_ref = input_ref.unwrap_or_else(NodeRef::new);
    let (visible, set_visible) = signal(false);
    let current_type = move || match (password, visible.get()) {
        (true, false) => "password",
        (true, true) => "text",
        (false, _) => input_type,
    };
    let toggle = move || set_visible.update(|v| *v = !*v);

    view! {
        <div class="input_box" class:has-value=move || !value.get().is_empty()>
            <input
                node_ref=input_ref
                id=id
                type=current_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {password.then(move || view! {
                <span
                    class="pw_hide"
                    role="button"
                    tabindex="0"
                    aria-label=move || if visible.get() { "Hide password" } else { "Show password" }
                    on:click=move |_| toggle()
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" || ev.key() == " " {
                            ev.prevent_default();
                            toggle();
                        }
                    }
                >
                    {move || if visible.get() { "🙈" } else { "👁️" }}
                </span>
            })}
            <span class="error-message">{move || error.get()}</span>
        </div>
    }
}
