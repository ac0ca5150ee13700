//! # client
//!
//! Leptos + WASM frontend for SafeStreet hazard reporting.
//!
//! The page has three mutually exclusive panels: report a hazard, look up
//! recent hazards near a location, and ask whether a location should be
//! avoided today. Each panel owns a small state model under `state`; the
//! `net::api` module performs the JSON calls in the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("safestreet client hydrating");
    leptos::mount::hydrate_body(app::App);
}
