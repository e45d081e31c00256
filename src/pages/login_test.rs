use super::*;
use crate::net::types::Plan;

fn user(role: Role) -> User {
    User {
        id: "u1".to_owned(),
        email: "ana@example.com".to_owned(),
        role,
        is_email_verified: true,
        plan: Plan::Free,
        plan_expires_at: None,
    }
}

fn status(code: u16) -> ApiError {
    ApiError::Status {
        status: code,
        message: None,
    }
}

#[test]
fn unauthorized_maps_to_bad_credentials_message() {
    assert_eq!(
        login_error_message(&status(401)),
        "Invalid email or password."
    );
}

#[test]
fn forbidden_maps_to_verification_message() {
    assert_eq!(
        login_error_message(&status(403)),
        "Please verify your email before logging in."
    );
}

#[test]
fn other_failures_map_to_generic_message() {
    assert_eq!(
        login_error_message(&status(500)),
        "Something went wrong. Please try again later."
    );
    assert_eq!(
        login_error_message(&ApiError::Network("offline".to_owned())),
        "Something went wrong. Please try again later."
    );
}

#[test]
fn admin_always_lands_on_user_management() {
    assert_eq!(
        post_login_destination(&user(Role::Admin), Some("/plans")),
        "/admin/users"
    );
    assert_eq!(post_login_destination(&user(Role::Admin), None), "/admin/users");
}

#[test]
fn user_returns_to_requested_path() {
    assert_eq!(
        post_login_destination(&user(Role::User), Some("/plans")),
        "/plans"
    );
}

#[test]
fn user_defaults_to_dashboard() {
    assert_eq!(post_login_destination(&user(Role::User), None), "/dashboard");
}

#[test]
fn non_local_return_paths_are_ignored() {
    assert_eq!(
        post_login_destination(&user(Role::User), Some("https://evil.example")),
        "/dashboard"
    );
}
