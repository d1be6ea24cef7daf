use super::*;

#[test]
fn registration_requires_mandatory_fields() {
    assert!(validate_registration("", "Dakar", "a@b.sn", "secret1", "secret1").is_err());
    assert!(validate_registration("Saint-Paul", "  ", "a@b.sn", "secret1", "secret1").is_err());
    assert!(validate_registration("Saint-Paul", "Dakar", "", "secret1", "secret1").is_err());
}

#[test]
fn registration_enforces_password_length_and_match() {
    assert_eq!(
        validate_registration("Saint-Paul", "Dakar", "a@b.sn", "abc", "abc"),
        Err("Le mot de passe doit contenir au moins 6 caractères.")
    );
    assert_eq!(
        validate_registration("Saint-Paul", "Dakar", "a@b.sn", "secret1", "secret2"),
        Err("Les mots de passe ne correspondent pas.")
    );
    assert_eq!(
        validate_registration("Saint-Paul", "Dakar", "a@b.sn", "secret1", "secret1"),
        Ok(())
    );
}

#[test]
fn optional_turns_blank_into_none() {
    assert_eq!(optional("   "), None);
    assert_eq!(optional(" Plateau "), Some("Plateau".to_owned()));
}
