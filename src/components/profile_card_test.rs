use super::*;

#[test]
fn initial_uses_first_character_uppercased() {
    assert_eq!(initial_for(Some("rex")), "R");
    assert_eq!(initial_for(Some("ñandu")), "Ñ");
}

#[test]
fn initial_falls_back_for_missing_or_empty_names() {
    assert_eq!(initial_for(None), "P");
    assert_eq!(initial_for(Some("")), "P");
}

#[test]
fn name_falls_back_to_anonymous() {
    assert_eq!(name_for(Some("Rex")), "Rex");
    assert_eq!(name_for(Some("")), "Anonymous Player");
    assert_eq!(name_for(None), "Anonymous Player");
}
