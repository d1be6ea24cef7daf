use super::*;

#[test]
fn change_requires_current_password() {
    assert!(validate_password_change("", "nouveau1", "nouveau1").is_err());
}

#[test]
fn change_enforces_length_and_match() {
    assert_eq!(
        validate_password_change("ancien", "abc", "abc"),
        Err("Le nouveau mot de passe doit contenir au moins 6 caractères.")
    );
    assert_eq!(
        validate_password_change("ancien", "nouveau1", "nouveau2"),
        Err("Les mots de passe ne correspondent pas.")
    );
}

#[test]
fn change_rejects_reusing_current_password() {
    assert_eq!(
        validate_password_change("nouveau1", "nouveau1", "nouveau1"),
        Err("Le nouveau mot de passe doit être différent de l'actuel.")
    );
}

#[test]
fn change_accepts_valid_input() {
    assert_eq!(validate_password_change("ancien", "nouveau1", "nouveau1"), Ok(()));
}
