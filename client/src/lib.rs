//! # client
//!
//! Leptos + WASM front-end for the FoodShare donation platform.
//!
//! This crate contains pages, components, the session router and token
//! store, and the REST helpers for the backend. The `foodshare` host crate
//! renders it with SSR and serves the hydrate bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
