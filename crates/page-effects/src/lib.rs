//! Page Effects
//!
//! Decorative behavior for server-rendered markup: developer card flips,
//! scroll fade-ins, staggered card entrance and password visibility icons.
//! Listeners live for the page lifetime, so closures are leaked on bind.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

/// Selectors that fade in when scrolled into view
pub const FADE_IN_SELECTOR: &str = ".dashboard-card, .login-card, .landing-container";

/// Intersection options for fade-ins
#[derive(Clone, Debug, PartialEq)]
pub struct FadeInOptions {
    pub threshold: f64,
    pub root_margin: String,
    pub class_name: String,
}

impl Default for FadeInOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            class_name: "fade-in".to_string(),
        }
    }
}

/// Entrance delay of the `index`-th card
pub fn stagger_delay_ms(index: usize, base_ms: u32, step_ms: u32) -> u32 {
    base_ms + step_ms * index as u32
}

/// Icon state after a click on a password toggle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visibility {
    pub input_type: &'static str,
    pub add_class: &'static str,
    pub remove_class: &'static str,
    pub label: &'static str,
}

pub fn toggled_visibility(current_type: &str) -> Visibility {
    if current_type == "password" {
        Visibility { input_type: "text", add_class: "fa-eye", remove_class: "fa-eye-slash", label: "Hide password" }
    } else {
        Visibility { input_type: "password", add_class: "fa-eye-slash", remove_class: "fa-eye", label: "Show password" }
    }
}

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

fn select_all(root: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Clicking `.card-inner` or `.developer-name-btn` flips its `.developer-card`
pub fn bind_card_flips() {
    let Some(doc) = document() else { return };
    for card in select_all(&doc, ".developer-card") {
        if let Ok(Some(inner)) = card.query_selector(".card-inner") {
            let target = card.clone();
            let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
                let _ = target.class_list().toggle("flipped");
            });
            let _ = inner.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
            on_click.forget();
        }
        if let Ok(Some(button)) = card.query_selector(".developer-name-btn") {
            let target = card.clone();
            let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
                ev.stop_propagation();
                let _ = target.class_list().toggle("flipped");
            });
            let _ = button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
            on_click.forget();
        }
    }
}

/// Add `options.class_name` to matching elements once they intersect the viewport
pub fn observe_fade_ins(selector: &str, options: &FadeInOptions) -> Result<(), JsValue> {
    let Some(doc) = document() else { return Ok(()) };
    let class_name = options.class_name.clone();
    let on_intersect = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else { continue };
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1(&class_name);
                }
            }
        },
    );

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);
    let observer = web_sys::IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &init)?;
    on_intersect.forget();

    for el in select_all(&doc, selector) {
        observer.observe(&el);
    }
    Ok(())
}

/// Cards start hidden and slide in one after another
pub fn stagger_cards(selector: &str, base_ms: u32, step_ms: u32) {
    let Some(doc) = document() else { return };
    for (index, el) in select_all(&doc, selector).into_iter().enumerate() {
        let Ok(card) = el.dyn_into::<HtmlElement>() else { continue };
        let style = card.style();
        let _ = style.set_property("opacity", "0");
        let _ = style.set_property("transform", "translateY(30px)");
        gloo_timers::callback::Timeout::new(stagger_delay_ms(index, base_ms, step_ms), move || {
            let style = card.style();
            let _ = style.set_property("transition", "all 0.6s ease");
            let _ = style.set_property("opacity", "1");
            let _ = style.set_property("transform", "translateY(0)");
        })
        .forget();
    }
}

fn toggle_password(icon: &Element) {
    let Ok(Some(wrapper)) = icon.closest(".input_box") else { return };
    let Ok(Some(input)) = wrapper.query_selector("input") else { return };
    let Ok(input) = input.dyn_into::<HtmlInputElement>() else { return };
    let next = toggled_visibility(&input.type_());
    input.set_type(next.input_type);
    let classes = icon.class_list();
    let _ = classes.remove_1(next.remove_class);
    let _ = classes.add_1(next.add_class);
    let _ = icon.set_attribute("aria-label", next.label);
}

fn toggle_icon_of(target: Option<web_sys::EventTarget>) -> Option<Element> {
    target
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(".toggle-password").ok().flatten())
}

/// Delegated click and Enter/Space handling for `.toggle-password` icons
pub fn bind_password_toggles() {
    let Some(doc) = document() else { return };

    let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        if let Some(icon) = toggle_icon_of(ev.target()) {
            ev.prevent_default();
            toggle_password(&icon);
        }
    });
    let _ = doc.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();

    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        let key = ev.key();
        if key != "Enter" && key != " " {
            return;
        }
        if let Some(icon) = toggle_icon_of(ev.target()) {
            ev.prevent_default();
            toggle_password(&icon);
        }
    });
    let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    on_keydown.forget();
}
