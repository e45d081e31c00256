use super::*;

#[test]
fn empty_select_value_means_all_plans() {
    assert_eq!(plan_filter_from_value(""), None);
    assert_eq!(plan_filter_from_value("unknown"), None);
}

#[test]
fn select_values_map_to_plans() {
    assert_eq!(plan_filter_from_value("free"), Some(Plan::Free));
    assert_eq!(plan_filter_from_value("silver"), Some(Plan::Silver));
    assert_eq!(plan_filter_from_value("gold"), Some(Plan::Gold));
}

#[test]
fn role_labels_use_wire_names() {
    assert_eq!(role_label(Role::User), "user");
    assert_eq!(role_label(Role::Admin), "admin");
}

#[test]
fn verification_labels() {
    assert_eq!(verification_label(true), "Verified");
    assert_eq!(verification_label(false), "Pending");
}

#[test]
fn block_action_labels() {
    assert_eq!(block_action_label(true), "Unblock");
    assert_eq!(block_action_label(false), "Block");
}

#[test]
fn expiry_label_by_plan() {
    assert_eq!(expiry_label(Plan::Free, None), "-");
    assert_eq!(expiry_label(Plan::Free, Some("2026-01-01")), "-");
    assert_eq!(
        expiry_label(Plan::Gold, Some("2026-01-01")),
        "Expires 2026-01-01"
    );
    assert_eq!(expiry_label(Plan::Silver, None), "No expiry");
}
