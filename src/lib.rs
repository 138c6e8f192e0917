//! # campus360-client
//!
//! Leptos + WASM frontend for the CAMPUS360 campus access-control system.
//! Users sign in, view a digital credential with an embedded QR code, scan
//! location QR codes to register campus entries, and administrators manage
//! accounts and generate location QR codes.
//!
//! This crate contains pages, components, session/auth state, and the
//! authenticated request gateway. All domain logic (authentication, QR
//! rendering, access validation) lives in the external backend; the client
//! is responsible for the session/token lifecycle and request policy.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging/panic hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
