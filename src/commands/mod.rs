//! Server Command Wrappers
//!
//! Frontend bindings to the server's JSON endpoints, organized by domain.

mod auth;
mod inventory;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

// Re-export all public items
pub use auth::*;
pub use inventory::*;

/// Status and raw body of a completed request
#[derive(Debug, Clone)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

/// POST a JSON body with `fetch`; any JS-side failure becomes the error string
pub async fn post_json(url: &str, body: &str, csrf_token: Option<&str>) -> Result<HttpReply, String> {
    let window = web_sys::window().ok_or("no window")?;

    let headers = Headers::new().map_err(js_error)?;
    headers.set("Content-Type", "application/json").map_err(js_error)?;
    if let Some(token) = csrf_token {
        headers.set("X-CSRFToken", token).map_err(js_error)?;
    }

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &init).map_err(js_error)?;
    let value = JsFuture::from(window.fetch_with_request(&request)).await.map_err(js_error)?;
    let response: Response = value.dyn_into().map_err(js_error)?;
    let text = JsFuture::from(response.text().map_err(js_error)?).await.map_err(js_error)?;

    Ok(HttpReply {
        status: response.status(),
        body: text.as_string().unwrap_or_default(),
    })
}

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
