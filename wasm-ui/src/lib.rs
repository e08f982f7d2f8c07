//! Web UI for product-catalog
//!
//! A Yew-based front end with a product creation form and a product list.

mod api;
mod app;
mod components;

use product_catalog::{BASE_URL_ENV, ClientConfig};
use wasm_bindgen::prelude::*;

/// Base URL captured at build time, if any.
const BUILD_BASE_URL: Option<&str> = option_env!("CATALOG_API_URL");

/// Resolve the backend origin once, before the first render.
fn resolve_config() -> ClientConfig {
    match ClientConfig::resolve(BUILD_BASE_URL) {
        Ok(config) => config,
        Err(e) => {
            gloo::console::warn!(format!(
                "{BASE_URL_ENV} ignored ({e}); using {}",
                product_catalog::DEFAULT_BASE_URL
            ));
            ClientConfig::default()
        }
    }
}

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    let props = app::AppProps {
        config: resolve_config(),
    };
    yew::Renderer::<app::App>::with_props(props).render();
}
