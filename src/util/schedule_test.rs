use super::*;

fn mass(id: i64, day: &str, time: &str) -> MassTime {
    MassTime {
        id,
        day_of_week: day.to_owned(),
        time: time.to_owned(),
        language: "French".to_owned(),
        mass_type: None,
        notes: None,
        is_active: true,
    }
}

#[test]
fn groups_in_canonical_day_order_sunday_first() {
    let times = vec![mass(1, "Saturday", "18:00:00"), mass(2, "Sunday", "10:00:00")];
    let grouped = group_by_day(&times);
    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped[0].day, "Sunday");
    assert_eq!(grouped[0].day_fr, "Dimanche");
    assert_eq!(grouped[1].day, "Saturday");
}

#[test]
fn sorts_within_a_day_by_time() {
    let times = vec![
        mass(1, "Sunday", "18:30:00"),
        mass(2, "Sunday", "07:00:00"),
        mass(3, "Sunday", "10:00:00"),
    ];
    let grouped = group_by_day(&times);
    let order: Vec<i64> = grouped[0].masses.iter().map(|m| m.id).collect();
    assert_eq!(order, vec![2, 3, 1]);
}

#[test]
fn drops_days_without_masses() {
    let grouped = group_by_day(&[mass(1, "Wednesday", "06:30:00")]);
    assert_eq!(grouped.len(), 1);
    assert_eq!(grouped[0].day, "Wednesday");
}

#[test]
fn empty_input_yields_empty_schedule() {
    assert!(group_by_day(&[]).is_empty());
}

#[test]
fn display_time_trims_seconds() {
    assert_eq!(display_time("08:30:00"), "08:30");
    assert_eq!(display_time("8:30"), "8:30");
}
