use super::*;

#[test]
fn limits_scale_with_tier() {
    assert_eq!(limits(Plan::Free), PlanLimits { games: 3, saved_profiles: 3 });
    assert_eq!(limits(Plan::Silver), PlanLimits { games: 5, saved_profiles: 5 });
    assert_eq!(limits(Plan::Gold), PlanLimits { games: 10, saved_profiles: 10 });
}

#[test]
fn catalog_lists_tiers_in_ascending_order() {
    let tiers = catalog();
    assert_eq!(tiers[0].plan, Plan::Free);
    assert_eq!(tiers[1].plan, Plan::Silver);
    assert_eq!(tiers[2].plan, Plan::Gold);
    assert!(tiers[2].popular);
}

#[test]
fn free_tier_is_never_purchasable() {
    assert!(!can_upgrade(Plan::Free, Plan::Free));
    assert!(!can_upgrade(Plan::Gold, Plan::Free));
}

#[test]
fn current_tier_is_a_noop() {
    assert!(!can_upgrade(Plan::Silver, Plan::Silver));
    assert!(!can_upgrade(Plan::Gold, Plan::Gold));
}

#[test]
fn paid_tiers_are_actionable_from_other_tiers() {
    assert!(can_upgrade(Plan::Free, Plan::Silver));
    assert!(can_upgrade(Plan::Free, Plan::Gold));
    assert!(can_upgrade(Plan::Gold, Plan::Silver));
}

#[test]
fn entries_past_the_limit_lock() {
    assert!(!is_locked(2, 3));
    assert!(is_locked(3, 3));
    assert!(is_locked(7, 5));
}

#[test]
fn badges_match_tiers() {
    assert_eq!(badge(Plan::Gold).label, "Gold Member");
    assert_eq!(badge(Plan::Silver).emoji, "⚔️");
    assert_eq!(badge(Plan::Free).label, "Free Member");
}
