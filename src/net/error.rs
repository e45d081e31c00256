//! Typed errors for the REST layer.
//!
//! ERROR HANDLING
//! ==============
//! Callers need to distinguish "offline" from "rejected", and rejected calls
//! by status. The transport layer only logs; clearing the session or
//! navigating on a 401 is the auth state's and route guard's job, never the
//! interceptor's, so speculative probes can fail without global side effects.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure surfaced by an API call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status, optionally carrying a
    /// `{ message }` body meant for inline display.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    /// A 2xx response whose body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status of the failure, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Session rejected or missing.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Authenticated but not allowed (role or verification).
    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(403)
    }

    /// Resource absent. On the profile probe this is an expected business
    /// state, not a failure.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Server-provided message when present, otherwise `fallback`. Used by
    /// forms that render backend validation messages verbatim.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } if !message.is_empty() => message,
            _ => fallback,
        }
    }
}
