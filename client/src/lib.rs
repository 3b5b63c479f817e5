//! # client
//!
//! Leptos + WASM frontend for the patient portal.
//!
//! This crate contains the root application component, the session
//! bootstrap that resolves the signed-in patient on mount, the toast
//! notification host, application state, and the REST helpers used to talk
//! to the patient API.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;


#[cfg(any(test, feature = "hydrate"))]
fn logger_init_failed_message(err: &dyn std::fmt::Display) -> String {
    format!("console logger init failed: {err}")
}

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("{}", logger_init_failed_message(&e));
    }
    leptos::mount::hydrate_body(app::App);
}
