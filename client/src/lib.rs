//! # client
//!
//! Leptos + WASM frontend for the Mermaid desk editor.
//!
//! This crate contains pages, components, reactive state, and the browser
//! glue that backs the traits defined in `diagram` (localStorage, the
//! `mermaid` engine binding, downloads and rasterization). Pan/zoom and
//! splitter gestures are delegated to the `preview` crate.
//!
//! The same code renders on the server (`ssr`) and hydrates in the browser
//! (`hydrate`); browser-only calls are gated on the `hydrate` feature and
//! no-op on the server.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and the panic hook, configure the
/// rendering engine, then hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("logger init failed: {err}");
    }
    util::mermaid::initialize(&diagram::config::EngineConfig::default());
    leptos::mount::hydrate_body(app::App);
}
