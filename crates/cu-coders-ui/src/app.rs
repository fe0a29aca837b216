//! Application shell mounting the header.

use cu_coders_core::HeaderConfig;
use leptos::prelude::*;

use crate::components::LightHeader;
use crate::theme::generate_stylesheet;

/// Id of the optional `<script type="application/json">` holding header config.
pub const CONFIG_ELEMENT_ID: &str = "header-config";

/// Read header configuration embedded in the page, falling back to defaults.
pub fn load_page_config() -> HeaderConfig {
    let Some(text) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content())
    else {
        return HeaderConfig::default();
    };

    match HeaderConfig::from_json(&text) {
        Ok(config) => config,
        Err(e) => {
            leptos::logging::error!("Ignoring invalid header config: {}", e);
            HeaderConfig::default()
        }
    }
}

/// Root component: injects the theme and renders the header.
#[component]

pub fn App(
    /// Whether the visitor is logged in, as reported by the host page.
    #[prop(optional)]
    is_logged_in: bool,
) -> impl IntoView {
    provide_context(load_page_config());

    view! {
        <style>{generate_stylesheet()}</style>
        <LightHeader is_logged_in=is_logged_in/>
    }
}
