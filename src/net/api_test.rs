use super::*;
use crate::net::types::{Pagination, User};

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(
        endpoint("/auth/me"),
        format!("{}/auth/me", crate::config::api_base())
    );
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("tok123"), "Bearer tok123");
}

#[test]
fn oauth_url_targets_provider_route() {
    assert_eq!(
        oauth_url("google"),
        format!("{}/auth/google", crate::config::api_base())
    );
}

#[test]
fn parse_body_unwraps_success_envelope() {
    let body = r#"{ "success": true, "data": { "user": { "_id": "u1", "email": "a@b.c" } } }"#;
    let data: MeData = parse_body(200, body).expect("parsed");
    assert_eq!(data.user.id, "u1");
}

#[test]
fn parse_body_maps_error_status_with_message() {
    let result: Result<MeData, ApiError> =
        parse_body(403, r#"{ "message": "Please verify your email" }"#);
    let err = result.expect_err("must fail");
    assert!(err.is_forbidden());
    assert_eq!(err.message_or("x"), "Please verify your email");
}

#[test]
fn parse_body_maps_unauthorized_without_body() {
    let result: Result<MeData, ApiError> = parse_body(401, "");
    let err = result.expect_err("must fail");
    assert!(err.is_unauthorized());
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.message_or("fallback"), "fallback");
}

#[test]
fn parse_body_maps_not_found_as_status() {
    let result: Result<Profile, ApiError> = parse_body(404, r#"{ "message": "not found" }"#);
    assert!(result.expect_err("must fail").is_not_found());
}

#[test]
fn parse_body_rejects_malformed_success_payload() {
    let result: Result<MeData, ApiError> = parse_body(200, r#"{ "nope": 1 }"#);
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[test]
fn parse_body_tolerates_unparseable_error_body() {
    let result: Result<User, ApiError> = parse_body(500, "<html>oops</html>");
    let err = result.expect_err("must fail");
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.message_or("generic"), "generic");
}

#[test]
fn users_query_includes_paging_defaults() {
    assert_eq!(users_query("", None, 1), "?page=1&limit=10");
}

#[test]
fn users_query_encodes_search_and_plan() {
    assert_eq!(
        users_query("rex the red", Some(Plan::Gold), 3),
        "?page=3&limit=10&search=rex%20the%20red&plan=gold"
    );
}

#[test]
fn pagination_defaults_inside_admin_payload() {
    let data: AdminUsersData = parse_body(200, r#"{ "success": true, "data": { "users": [] } }"#)
        .expect("parsed");
    assert!(data.users.is_empty());
    assert_eq!(data.pagination, Pagination::default());
}
