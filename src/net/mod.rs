//! Networking modules for the REST backend boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the single point of HTTP egress, `error` the failure taxonomy
//! callers branch on, and `types` the shared wire schema.

pub mod api;
pub mod error;
pub mod types;
