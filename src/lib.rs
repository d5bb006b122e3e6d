//! # shareclip
//!
//! Leptos + WASM browser client for a shared, live clipboard feed.
//!
//! The page keeps a websocket open to the feed server, mirrors the server's
//! slots in a local store, and lets the user post, copy, inspect and delete
//! messages. Protocol types live in the `protocol` crate; this crate holds
//! the connection manager, state, and the components that render it.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs the panic hook and console logger, then
/// mounts [`app::App`] on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
