use super::*;

#[test]
fn hidden_on_auth_screens() {
    assert!(should_hide("/login", false));
    assert!(should_hide("/signup", false));
}

#[test]
fn hidden_while_session_restores() {
    assert!(should_hide("/dashboard", true));
}

#[test]
fn visible_elsewhere_once_loaded() {
    assert!(!should_hide("/", false));
    assert!(!should_hide("/dashboard", false));
    assert!(!should_hide("/plans", false));
}

#[test]
fn display_name_strips_domain() {
    assert_eq!(display_name("ana@example.com"), "ana");
    assert_eq!(display_name("no-at-sign"), "no-at-sign");
}

#[test]
fn avatar_initial_uppercases_first_alphanumeric() {
    assert_eq!(avatar_initial("ana@example.com"), "A");
    assert_eq!(avatar_initial("_9lives@example.com"), "9");
    assert_eq!(avatar_initial("@@@"), "U");
}
