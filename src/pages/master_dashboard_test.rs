use super::*;

#[test]
fn new_parish_requires_mandatory_fields() {
    assert!(validate_new_parish("", "Dakar", "a@b.sn", "secret1").is_err());
    assert!(validate_new_parish("Saint-Paul", "", "a@b.sn", "secret1").is_err());
    assert!(validate_new_parish("Saint-Paul", "Dakar", " ", "secret1").is_err());
    assert!(validate_new_parish("Saint-Paul", "Dakar", "a@b.sn", "abc").is_err());
    assert_eq!(validate_new_parish("Saint-Paul", "Dakar", "a@b.sn", "secret1"), Ok(()));
}

#[test]
fn credentials_update_with_both_blank_is_none() {
    assert_eq!(credentials_update("", ""), None);
    assert_eq!(credentials_update("   ", ""), None);
}

#[test]
fn credentials_update_keeps_only_filled_fields() {
    let update = credentials_update(" nouvel@email.sn ", "").expect("email only");
    assert_eq!(update.admin_email.as_deref(), Some("nouvel@email.sn"));
    assert_eq!(update.admin_password, None);

    let update = credentials_update("", "nouveau1").expect("password only");
    assert_eq!(update.admin_email, None);
    assert_eq!(update.admin_password.as_deref(), Some("nouveau1"));
}

#[test]
fn approval_labels() {
    assert_eq!(approval_label(true), "Approuvée");
    assert_eq!(approval_label(false), "En attente");
}
