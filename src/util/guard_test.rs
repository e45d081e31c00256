use super::*;
use crate::net::types::{Plan, Profile, User};

fn user(role: Role, verified: bool) -> User {
    User {
        id: "u1".to_owned(),
        email: "ana@example.com".to_owned(),
        role,
        is_email_verified: verified,
        plan: Plan::Free,
        plan_expires_at: None,
    }
}

fn auth(user_value: Option<User>) -> AuthState {
    AuthState {
        user: user_value,
        loading: false,
    }
}

fn any_route() -> RouteRequirements {
    RouteRequirements::default()
}

fn admin_route() -> RouteRequirements {
    RouteRequirements {
        admin_only: true,
        requires_profile: false,
    }
}

fn profile_route() -> RouteRequirements {
    RouteRequirements {
        admin_only: false,
        requires_profile: true,
    }
}

#[test]
fn loading_waits_regardless_of_route() {
    let state = AuthState {
        user: None,
        loading: true,
    };
    assert_eq!(
        decide(&state, admin_route(), &ProfileSlot::Unknown, "/admin/users"),
        RouteDecision::Wait
    );
}

#[test]
fn unauthenticated_redirects_to_login_with_return_path() {
    assert_eq!(
        decide(&auth(None), any_route(), &ProfileSlot::Unknown, "/plans"),
        RouteDecision::Redirect("/login?from=%2Fplans".to_owned())
    );
}

#[test]
fn login_redirect_omits_empty_or_root_return_path() {
    assert_eq!(login_redirect(""), "/login");
    assert_eq!(login_redirect("/"), "/login");
    assert_eq!(login_redirect("/dashboard"), "/login?from=%2Fdashboard");
}

#[test]
fn unverified_user_goes_to_verify_email_before_role_check() {
    // An authenticated, unverified user requesting an admin-only route must
    // be sent to verification, never bounced to the dashboard.
    let state = auth(Some(user(Role::User, false)));
    assert_eq!(
        decide(&state, admin_route(), &ProfileSlot::Unknown, "/admin/users"),
        RouteDecision::Redirect("/verify-email".to_owned())
    );
}

#[test]
fn unverified_admin_also_goes_to_verify_email() {
    let state = auth(Some(user(Role::Admin, false)));
    assert_eq!(
        decide(&state, admin_route(), &ProfileSlot::Unknown, "/admin/users"),
        RouteDecision::Redirect("/verify-email".to_owned())
    );
}

#[test]
fn non_admin_on_admin_route_goes_to_dashboard() {
    let state = auth(Some(user(Role::User, true)));
    assert_eq!(
        decide(&state, admin_route(), &ProfileSlot::Unknown, "/admin/users"),
        RouteDecision::Redirect("/dashboard".to_owned())
    );
}

#[test]
fn missing_profile_redirects_to_create_profile() {
    let state = auth(Some(user(Role::User, true)));
    assert_eq!(
        decide(&state, profile_route(), &ProfileSlot::Missing, "/dashboard"),
        RouteDecision::Redirect("/create-profile".to_owned())
    );
}

#[test]
fn create_profile_path_never_redirects_to_itself() {
    let state = auth(Some(user(Role::User, true)));
    assert_eq!(
        decide(
            &state,
            profile_route(),
            &ProfileSlot::Missing,
            CREATE_PROFILE_PATH
        ),
        RouteDecision::Allow
    );
}

#[test]
fn admin_bypasses_profile_gating_entirely() {
    let state = auth(Some(user(Role::Admin, true)));
    assert_eq!(
        decide(&state, profile_route(), &ProfileSlot::Missing, "/dashboard"),
        RouteDecision::Allow
    );
}

#[test]
fn unresolved_probe_waits_instead_of_guessing() {
    let state = auth(Some(user(Role::User, true)));
    for slot in [ProfileSlot::Unknown, ProfileSlot::Loading, ProfileSlot::Failed] {
        assert_eq!(
            decide(&state, profile_route(), &slot, "/dashboard"),
            RouteDecision::Wait
        );
    }
}

#[test]
fn present_profile_allows_profile_gated_route() {
    let state = auth(Some(user(Role::User, true)));
    let slot = ProfileSlot::Present(Profile {
        username: "Rex".to_owned(),
        ..Profile::default()
    });
    assert_eq!(
        decide(&state, profile_route(), &slot, "/dashboard"),
        RouteDecision::Allow
    );
}

#[test]
fn verified_user_allowed_on_plain_protected_route() {
    let state = auth(Some(user(Role::User, true)));
    assert_eq!(
        decide(&state, any_route(), &ProfileSlot::Unknown, "/plans"),
        RouteDecision::Allow
    );
}
