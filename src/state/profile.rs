//! Shared load state for the current user's own profile.
//!
//! DESIGN
//! ======
//! The route guard issues the profile-existence probe and caches the result
//! here, so pages that render the profile reuse the same fetch instead of
//! racing a duplicate request on mount.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::types::Profile;

/// Load status of the current user's own profile.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ProfileSlot {
    /// Not probed yet this session.
    #[default]
    Unknown,
    /// Probe in flight.
    Loading,
    /// Profile exists.
    Present(Profile),
    /// Server confirmed no profile yet — the expected state for fresh
    /// accounts, driving the create-profile redirect.
    Missing,
    /// Probe failed with a non-404 error; the guard must not guess an
    /// allow or deny from this.
    Failed,
}

impl ProfileSlot {
    /// The loaded profile, when present.
    pub fn profile(&self) -> Option<&Profile> {
        match self {
            Self::Present(profile) => Some(profile),
            _ => None,
        }
    }

    /// The probe reached a definitive answer (present or missing).
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Present(_) | Self::Missing)
    }
}
