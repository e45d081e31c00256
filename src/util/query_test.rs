use super::*;

#[test]
fn query_param_reads_value_with_and_without_question_mark() {
    assert_eq!(query_param("?token=abc123", "token"), Some("abc123".to_owned()));
    assert_eq!(query_param("token=abc123", "token"), Some("abc123".to_owned()));
}

#[test]
fn query_param_finds_key_among_others() {
    assert_eq!(
        query_param("?a=1&session_id=cs_test_42&b=2", "session_id"),
        Some("cs_test_42".to_owned())
    );
}

#[test]
fn query_param_missing_key_is_none() {
    assert_eq!(query_param("?a=1&b=2", "token"), None);
    assert_eq!(query_param("", "token"), None);
}

#[test]
fn query_param_bare_key_yields_empty_value() {
    assert_eq!(query_param("?token", "token"), Some(String::new()));
}

#[test]
fn query_param_decodes_percent_escapes() {
    assert_eq!(query_param("?from=%2Fplans", "from"), Some("/plans".to_owned()));
    assert_eq!(query_param("?q=a+b", "q"), Some("a b".to_owned()));
}

#[test]
fn encode_component_escapes_reserved_characters() {
    assert_eq!(encode_component("/plans"), "%2Fplans");
    assert_eq!(encode_component("a b&c"), "a%20b%26c");
    assert_eq!(encode_component("safe-chars_.~"), "safe-chars_.~");
}

#[test]
fn decode_component_round_trips_encode() {
    for raw in ["/payment/success", "käse & wine", "plain"] {
        assert_eq!(decode_component(&encode_component(raw)), raw);
    }
}

#[test]
fn decode_component_passes_malformed_escapes_through() {
    assert_eq!(decode_component("%zz"), "%zz");
    assert_eq!(decode_component("%2"), "%2");
    assert_eq!(decode_component("100%"), "100%");
}
