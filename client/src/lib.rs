//! # client
//!
//! Leptos + WASM single-page console for administering a Citrus test
//! project. Five views (welcome, config, testcases, stats, about) are
//! selected by a static route table; navigating between them fires
//! `route:<view>` events observed by the application shell.
//!
//! The navigation model in [`router`] is plain Rust and is exercised by
//! native unit tests; everything browser-facing sits behind the `csr`
//! feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;

/// Browser entry point: install the panic hook and logger, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::warn!("logger was already initialized");
    }
    leptos::mount::mount_to_body(app::App);
}
