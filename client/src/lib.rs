//! # client
//!
//! Leptos + WASM frontend for the account registration page.
//!
//! This crate contains the page, its components, the form/session/notice
//! state, and the network types shared with the host. The host binary renders
//! it on the server (`ssr`); the browser bundle hydrates it (`hydrate`).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
