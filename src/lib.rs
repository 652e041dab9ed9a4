//! # gatewatch
//!
//! Leptos + WASM frontend shell for the gate access console.
//!
//! This crate owns the client-side session facade (login, registration,
//! logout, session restore), the role-based landing redirect, and the route
//! table that wires them together. Admin and gatekeeper consoles consume the
//! same session context.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
