use super::*;

#[test]
fn valid_input_trims_email() {
    assert_eq!(
        validate_signup("  ana@example.com ", "hunter2!", "hunter2!"),
        Ok(("ana@example.com".to_owned(), "hunter2!".to_owned()))
    );
}

#[test]
fn mismatched_passwords_rejected() {
    assert_eq!(
        validate_signup("ana@example.com", "hunter2!", "hunter3!"),
        Err("Passwords do not match")
    );
}

#[test]
fn empty_fields_rejected() {
    assert_eq!(
        validate_signup("", "hunter2!", "hunter2!"),
        Err("Enter email and password.")
    );
    assert_eq!(
        validate_signup("ana@example.com", "", ""),
        Err("Enter email and password.")
    );
}
