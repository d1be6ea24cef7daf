use super::*;

#[test]
fn validate_rejects_missing_fields() {
    assert!(validate_mass_time("", "10:00", "French").is_err());
    assert!(validate_mass_time("Funday", "10:00", "French").is_err());
    assert!(validate_mass_time("Sunday", "", "French").is_err());
    assert!(validate_mass_time("Sunday", "10:00", "").is_err());
    assert_eq!(validate_mass_time("Sunday", "10:00", "French"), Ok(()));
}

#[test]
fn payload_drops_blank_optionals() {
    let payload = payload_from_form("Sunday", "10:00", "Wolof", "", "   ");
    assert_eq!(payload.mass_type, None);
    assert_eq!(payload.notes, None);
    assert_eq!(payload.day_of_week, "Sunday");
}

#[test]
fn payload_keeps_filled_optionals_trimmed() {
    let payload = payload_from_form("Saturday", "18:30", "French", "Vigil Mass", " Crypte ");
    assert_eq!(payload.mass_type.as_deref(), Some("Vigil Mass"));
    assert_eq!(payload.notes.as_deref(), Some("Crypte"));
}

#[test]
fn form_time_strips_seconds() {
    assert_eq!(form_time("10:30:00"), "10:30");
    assert_eq!(form_time("10:30"), "10:30");
}
