//! # client
//!
//! Leptos + WASM frontend for Calorie Scan.
//!
//! Holds the page-local auth session machine, the nav/modal chrome that
//! renders it, and the gated food photo upload form. Nothing in this crate
//! persists state or talks to an auth backend.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating calorie scan client");
    leptos::mount::hydrate_body(app::App);
}
