use super::*;

#[test]
fn api_base_has_no_trailing_slash() {
    assert!(!api_base().ends_with('/'));
}

#[test]
fn api_base_defaults_to_local_backend() {
    if option_env!("GAMEPRO_API_BASE").is_none() {
        assert_eq!(api_base(), "http://localhost:5000/api");
    }
}
