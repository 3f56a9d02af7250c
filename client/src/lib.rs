//! # client
//!
//! Leptos front end for the Staylane marketing and account site: static
//! pages, login and password-reset flows, the become-a-host form with its
//! date picker, the visitor-tracking beacon, and the session-expiry modal.
//!
//! Built twice: with `ssr` for the axum host in `server`, and with `hydrate`
//! as the WASM bundle that takes over in the browser. The date-picker model
//! itself lives in the `calendar` crate.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod tracking;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        leptos::logging::warn!("console logger already installed: {e}");
    }

    leptos::mount::hydrate_body(|| {
        provide_context(config::SiteConfig::from_document());
        view! { <App/> }
    });
}
