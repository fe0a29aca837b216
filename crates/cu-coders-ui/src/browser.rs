//! Browser bindings for the logout flow.
//!
//! [`FetchLogoutClient`] reaches the backend through `window.fetch` with
//! cookies attached; [`WindowBrowser`] writes to the console and drives
//! `window.location`.

use cu_coders_core::{Browser, Error, LogoutClient, LogoutResponse, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, RequestMode, Response};

/// Best-effort message for a JavaScript exception or rejection value.
pub fn js_error_message(value: &JsValue, fallback: &str) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }
    value
        .dyn_ref::<js_sys::Error>()
        .and_then(|e| e.message().as_string())
        .unwrap_or_else(|| fallback.to_string())
}

fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or_else(|| Error::Network("No browser window available".to_string()))
}

/// Logout transport over `window.fetch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchLogoutClient;

impl FetchLogoutClient {
    fn build_request(endpoint: &str) -> Result<Request> {
        let init = RequestInit::new();
        init.set_method("GET");
        init.set_mode(RequestMode::Cors);
        init.set_credentials(RequestCredentials::Include);

        Request::new_with_str_and_init(endpoint, &init)
            .map_err(|e| Error::Network(js_error_message(&e, "Failed to build request")))
    }
}

impl LogoutClient for FetchLogoutClient {
    async fn request_logout(&self, endpoint: &str) -> Result<LogoutResponse> {
        let request = Self::build_request(endpoint)?;

        let value = JsFuture::from(window()?.fetch_with_request(&request))
            .await
            .map_err(|e| Error::Network(js_error_message(&e, "Network Error")))?;

        let response: Response = value
            .dyn_into()
            .map_err(|_| Error::Decode("fetch did not resolve to a Response".to_string()))?;

        if !response.ok() {
            return Err(Error::Http {
                status: response.status(),
            });
        }

        LogoutResponse::from_body(read_json_body(&response).await)
    }
}

/// Body of `response` as JSON, or `None` when it is empty or not JSON.
async fn read_json_body(response: &Response) -> Option<serde_json::Value> {
    let body = response.json().ok()?;
    let json = JsFuture::from(body).await.ok()?;
    serde_wasm_bindgen::from_value(json).ok()
}

/// Browser effects backed by the page's `window`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowBrowser;

impl Browser for WindowBrowser {
    fn log(&self, message: &str) {
        leptos::logging::log!("{}", message);
    }

    fn error(&self, message: &str) {
        leptos::logging::error!("{}", message);
    }

    fn navigate(&self, href: &str) -> Result<()> {
        window()
            .map_err(|e| Error::Navigation(e.to_string()))?
            .location()
            .set_href(href)
            .map_err(|e| Error::Navigation(js_error_message(&e, href)))
    }
}
