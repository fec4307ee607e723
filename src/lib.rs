//! # codemasters-client
//!
//! Leptos + WASM frontend for the CodeMasters coding-contest platform.
//!
//! This crate contains the page-level forms (signup, contest creation,
//! contest registration, live joining), the shared submission state
//! machine, and the REST API layer. Form validation and status transitions
//! live in `state` as plain testable models; pages wire Leptos signals
//! around them.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
