use super::*;

#[test]
fn validate_login_input_trims_email_and_keeps_password_verbatim() {
    assert_eq!(
        validate_login_input("  cure@paroisse.sn  ", "s3cret "),
        Ok(("cure@paroisse.sn".to_owned(), "s3cret ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert!(validate_login_input("", "pw").is_err());
    assert!(validate_login_input("   ", "pw").is_err());
    assert!(validate_login_input("a@b.sn", "").is_err());
}
