//! # client
//!
//! Leptos + WASM front-end for the print-shop inventory service.
//!
//! This crate contains pages, components, the signal-backed application
//! store, and the `gloo-net` transport. Session handling, fetching and form
//! submission live in the `inventory` crate; this crate binds them to the DOM.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Only fails if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!(
        "inventory client using {}",
        inventory::ApiConfig::from_compile_env().base_url
    );
    leptos::mount::mount_to_body(app::App);
}

