//! Pure navigation-gating decisions for protected routes.
//!
//! DESIGN
//! ======
//! The ordering is deliberate: authentication before verification,
//! verification before role, role before profile-completeness. Each failure
//! mode has a strictly narrower remediation path than the one before it, so
//! checking out of order could bounce an authenticated-but-unverified admin
//! into a profile-creation loop instead of the verification screen.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::state::profile::ProfileSlot;
use crate::util::query::encode_component;

/// Path of the lazy profile-creation screen; exempt from profile gating so
/// the redirect cannot loop onto itself.
pub const CREATE_PROFILE_PATH: &str = "/create-profile";

/// Declared requirements of a protected route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteRequirements {
    /// Only admin accounts may enter.
    pub admin_only: bool,
    /// Non-admin users must have a completed profile.
    pub requires_profile: bool,
}

/// Outcome of a guard evaluation. Terminal outcomes are mutually exclusive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render a neutral waiting state; decide nothing yet.
    Wait,
    /// Render the requested page.
    Allow,
    /// Navigate to the given path instead.
    Redirect(String),
}

/// Login redirect carrying the originally requested path so a successful
/// login can return there.
pub fn login_redirect(requested: &str) -> String {
    if requested.is_empty() || requested == "/" {
        "/login".to_owned()
    } else {
        format!("/login?from={}", encode_component(requested))
    }
}

/// Decide whether the route at `current_path` may render.
///
/// Re-evaluated on every navigation and on every auth or probe state
/// change. A probe that has not resolved (or failed with a non-404 error)
/// yields [`RouteDecision::Wait`] — never an incorrect allow or deny.
pub fn decide(
    auth: &AuthState,
    requirements: RouteRequirements,
    profile: &ProfileSlot,
    current_path: &str,
) -> RouteDecision {
    if auth.loading {
        return RouteDecision::Wait;
    }

    let Some(user) = auth.user.as_ref() else {
        return RouteDecision::Redirect(login_redirect(current_path));
    };

    if !user.is_email_verified {
        return RouteDecision::Redirect("/verify-email".to_owned());
    }

    let is_admin = user.role == Role::Admin;
    if requirements.admin_only && !is_admin {
        return RouteDecision::Redirect("/dashboard".to_owned());
    }

    // Admin accounts have no profile concept; the probe is scoped to users.
    if requirements.requires_profile && !is_admin && current_path != CREATE_PROFILE_PATH {
        match profile {
            ProfileSlot::Present(_) => {}
            ProfileSlot::Missing => {
                return RouteDecision::Redirect(CREATE_PROFILE_PATH.to_owned());
            }
            ProfileSlot::Unknown | ProfileSlot::Loading | ProfileSlot::Failed => {
                return RouteDecision::Wait;
            }
        }
    }

    RouteDecision::Allow
}
