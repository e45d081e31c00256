use super::*;

fn status_error(status: u16, message: Option<&str>) -> ApiError {
    ApiError::Status {
        status,
        message: message.map(str::to_owned),
    }
}

#[test]
fn status_predicates_match_their_codes() {
    assert!(status_error(401, None).is_unauthorized());
    assert!(status_error(403, None).is_forbidden());
    assert!(status_error(404, None).is_not_found());
    assert!(!status_error(500, None).is_unauthorized());
}

#[test]
fn network_errors_carry_no_status() {
    let err = ApiError::Network("offline".to_owned());
    assert_eq!(err.status(), None);
    assert!(!err.is_unauthorized());
    assert!(!err.is_not_found());
}

#[test]
fn message_or_prefers_server_message() {
    let err = status_error(400, Some("Username already taken"));
    assert_eq!(err.message_or("fallback"), "Username already taken");
}

#[test]
fn message_or_falls_back_on_missing_or_empty_message() {
    assert_eq!(status_error(400, None).message_or("fallback"), "fallback");
    assert_eq!(status_error(400, Some("")).message_or("fallback"), "fallback");
    assert_eq!(
        ApiError::Network("offline".to_owned()).message_or("fallback"),
        "fallback"
    );
}

#[test]
fn display_includes_status() {
    assert_eq!(
        status_error(403, Some("nope")).to_string(),
        "request failed with status 403"
    );
}
