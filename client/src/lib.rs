//! # client
//!
//! Leptos + WASM frontend for the AI support desk: role selection, sign-in,
//! chat, document upload, analytics and settings over a remote REST backend.
//!
//! Session handling is presentation-only. The bearer credential is decoded
//! without verifying its signature to decide what to render; the backend
//! enforces every access decision.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
