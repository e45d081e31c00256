//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only configurable surface of the client is the API base URL. It is
//! resolved at compile time so the shipped WASM bundle carries no runtime
//! config dependency.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Development default used when no override is baked in at build time.
const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Base URL for all REST calls, overridable via `GAMEPRO_API_BASE` at build
/// time. Never ends with a trailing slash.
pub fn api_base() -> &'static str {
    option_env!("GAMEPRO_API_BASE").unwrap_or(DEFAULT_API_BASE)
}
