use super::*;

#[test]
fn day_order_starts_on_sunday_and_covers_the_week() {
    assert_eq!(DAY_ORDER[0], "Sunday");
    assert_eq!(DAY_ORDER.len(), 7);
}

#[test]
fn day_name_translates_known_days() {
    assert_eq!(day_name("Sunday"), "Dimanche");
    assert_eq!(day_name("Wednesday"), "Mercredi");
}

#[test]
fn unknown_values_pass_through() {
    assert_eq!(day_name("Caturday"), "Caturday");
    assert_eq!(language_name("Diola"), "Diola");
    assert_eq!(mass_type_name("Messe spéciale"), "Messe spéciale");
}

#[test]
fn mass_type_translates_common_labels() {
    assert_eq!(mass_type_name("Main Mass"), "Messe principale");
    assert_eq!(mass_type_name("Vigil Mass"), "Messe de vigile");
    assert_eq!(mass_type_name("Morning Mass"), "Messe du matin");
}
