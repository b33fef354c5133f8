//! # sellpoint
//!
//! Leptos + WASM browser client for the sellpoint classifieds backend:
//! browse and filter ads, post and edit your own, keep favorites, and manage
//! a profile.
//!
//! Business rules (validation, capabilities, session transitions) live in
//! plain functions and structs so they test natively; everything that touches
//! the browser is compiled only with the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod forms;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: panic hook, console logging, then mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let config = config::current();
    let _ = console_log::init_with_level(config.log_level);
    log::info!("sellpoint client starting against {}", config.api_base_url);
    leptos::mount::mount_to_body(app::App);
}
