use super::*;

#[test]
fn prepare_comment_trims_whitespace() {
    assert_eq!(prepare_comment("  gg wp  "), Some("gg wp".to_owned()));
}

#[test]
fn prepare_comment_rejects_blank_drafts() {
    assert_eq!(prepare_comment(""), None);
    assert_eq!(prepare_comment("   "), None);
}
