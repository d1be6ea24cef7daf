//! # paroisses-sn
//!
//! Leptos + WASM frontend for publishing and managing Catholic parish mass
//! schedules and news in Senegal. Public visitors search parishes by city or
//! proximity and read schedules; parish administrators sign in to manage
//! their own mass times and news; master administrators manage all parishes
//! and approve pending registrations.
//!
//! The crate is a thin presentation layer over the REST backend. The one
//! stateful core is the authentication session: a tab-scoped token store,
//! an in-memory session reconciled against the backend at startup, route
//! guards for the admin screens, and role-driven navigation.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
