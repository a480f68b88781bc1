//! Krishi Sahayak farmer web app - Leptos CSR frontend
//!
//! Everything heavy (price computation, disease classification, forecasts)
//! lives behind the REST API; this crate is the presentation layer.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logger
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Krishi Sahayak starting...");

    // Hide the static loading screen as soon as the WASM module loads
    hide_loading_screen();

    // Mount the Leptos app
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the loading screen element baked into index.html.
fn hide_loading_screen() {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => return,
    };

    if let Some(loading) = document.get_element_by_id("app-loading") {
        if let Some(el) = loading.dyn_ref::<HtmlElement>() {
            el.class_list().add_1("hidden").ok();
        }
        loading
            .set_attribute("style", "display: none !important;")
            .ok();
    } else {
        log::warn!("loading element not found in index.html");
    }
}
