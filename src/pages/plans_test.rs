use super::*;

#[test]
fn current_tier_labelled_as_such() {
    assert_eq!(tier_label(Plan::Silver, Plan::Silver), "Current Plan");
    assert_eq!(tier_label(Plan::Gold, Plan::Gold), "Current Plan");
}

#[test]
fn free_tier_is_basic_unless_current() {
    assert_eq!(tier_label(Plan::Silver, Plan::Free), "Basic Plan");
    assert_eq!(tier_label(Plan::Free, Plan::Free), "Current Plan");
}

#[test]
fn paid_tiers_get_capitalized_upgrade_labels() {
    assert_eq!(tier_label(Plan::Free, Plan::Silver), "Upgrade to Silver");
    assert_eq!(tier_label(Plan::Free, Plan::Gold), "Upgrade to Gold");
    assert_eq!(tier_label(Plan::Gold, Plan::Silver), "Upgrade to Silver");
}
