use super::*;

#[test]
fn record_from_raw_requires_a_token() {
    assert_eq!(record_from_raw(None, Some("3".to_owned()), None, None), None);
    assert_eq!(record_from_raw(Some(String::new()), Some("3".to_owned()), None, None), None);
}

#[test]
fn record_from_raw_parses_full_record() {
    let record = record_from_raw(
        Some("tok-1".to_owned()),
        Some("42".to_owned()),
        Some("Saint-Dominique".to_owned()),
        Some("true".to_owned()),
    )
    .expect("full record should load");
    assert_eq!(record.token, "tok-1");
    assert_eq!(record.parish_id, Some(42));
    assert_eq!(record.parish_name.as_deref(), Some("Saint-Dominique"));
    assert!(record.is_master_admin);
}

#[test]
fn record_from_raw_degrades_unparsable_fields() {
    let record = record_from_raw(
        Some("tok-1".to_owned()),
        Some("not-a-number".to_owned()),
        None,
        Some("yes".to_owned()),
    )
    .expect("token alone is enough for a record");
    assert_eq!(record.parish_id, None);
    assert_eq!(record.parish_name, None);
    assert!(!record.is_master_admin);
}

#[test]
fn record_from_raw_master_flag_only_accepts_true() {
    let record = |flag: &str| {
        record_from_raw(Some("t".to_owned()), None, None, Some(flag.to_owned()))
            .expect("record loads")
            .is_master_admin
    };
    assert!(record("true"));
    assert!(!record("false"));
    assert!(!record("TRUE"));
}

#[test]
fn from_login_copies_all_fields() {
    let creds = StoredCredentials::from_login(&LoginResponse {
        access_token: "tok-9".to_owned(),
        parish_id: 7,
        parish_name: "Notre-Dame du Cap-Vert".to_owned(),
        is_master_admin: false,
    });
    assert_eq!(creds.token, "tok-9");
    assert_eq!(creds.parish_id, Some(7));
    assert_eq!(creds.parish_name.as_deref(), Some("Notre-Dame du Cap-Vert"));
    assert!(!creds.is_master_admin);
}

#[test]
fn load_and_clear_are_safe_outside_a_browser() {
    // Native test build has no sessionStorage; these must be no-ops.
    clear();
    assert_eq!(load(), None);
    clear();
}
