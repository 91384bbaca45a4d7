//! # client
//!
//! Leptos + WASM frontend for the portfolio site.
//!
//! This crate contains the page, components, application state, static
//! content, and the pure helpers behind scroll-spy navigation and the
//! simulated agent chat. It is compiled with `hydrate` for the browser and
//! `ssr` for server rendering.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
