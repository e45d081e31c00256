use super::*;

#[test]
fn default_slot_is_unknown() {
    assert_eq!(ProfileSlot::default(), ProfileSlot::Unknown);
}

#[test]
fn only_terminal_states_resolve() {
    assert!(ProfileSlot::Present(Profile::default()).is_resolved());
    assert!(ProfileSlot::Missing.is_resolved());
    assert!(!ProfileSlot::Unknown.is_resolved());
    assert!(!ProfileSlot::Loading.is_resolved());
    assert!(!ProfileSlot::Failed.is_resolved());
}

#[test]
fn profile_accessor_only_yields_present() {
    let profile = Profile {
        username: "Rex".to_owned(),
        ..Profile::default()
    };
    assert_eq!(
        ProfileSlot::Present(profile.clone()).profile(),
        Some(&profile)
    );
    assert_eq!(ProfileSlot::Missing.profile(), None);
}
