use super::*;

#[test]
fn category_labels_are_french() {
    assert_eq!(category_label("General"), "Général");
    assert_eq!(category_label("Event"), "Événement");
    assert_eq!(category_label("Announcement"), "Annonce");
    assert_eq!(category_label("Other"), "Other");
}

#[test]
fn validate_requires_title_and_content() {
    assert!(validate_news("", "contenu").is_err());
    assert!(validate_news("  ", "contenu").is_err());
    assert!(validate_news("titre", "   ").is_err());
    assert_eq!(validate_news("titre", "contenu"), Ok(()));
}

#[test]
fn display_date_formats_iso_timestamps() {
    assert_eq!(display_date("2024-03-01T09:00:00"), "01/03/2024");
    assert_eq!(display_date("2024-12-24"), "24/12/2024");
}

#[test]
fn display_date_passes_garbage_through() {
    assert_eq!(display_date("hier"), "hier");
}
