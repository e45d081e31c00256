//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome and interaction surfaces while reading
//! auth and profile state from context providers. `protected` wires the pure
//! route guard into the router.

pub mod comments_panel;
pub mod loader;
pub mod navbar;
pub mod profile_card;
pub mod protected;
