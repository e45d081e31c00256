//! # gamepro-client
//!
//! Leptos + WASM frontend for the GamePro gaming-community platform: account
//! sessions, route guarding, player profiles, reactions/comments and tiered
//! memberships against an external REST backend.
//!
//! The core is deliberately thin: a localStorage-backed session store, one
//! HTTP egress point, a reactive auth session, and a pure route-guard
//! decision function. Pages compose those through the router.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Client entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
