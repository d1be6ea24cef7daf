use super::*;

#[test]
fn login_response_defaults_master_flag_to_false() {
    let resp: LoginResponse = serde_json::from_value(serde_json::json!({
        "access_token": "tok-1",
        "parish_id": 4,
        "parish_name": "Saint-Joseph de Médina"
    }))
    .expect("login response should deserialize without is_master_admin");
    assert!(!resp.is_master_admin);
    assert_eq!(resp.parish_id, 4);
}

#[test]
fn parish_defaults_mass_times_to_empty() {
    let parish: Parish = serde_json::from_value(serde_json::json!({
        "id": 1,
        "name": "Cathédrale du Souvenir Africain",
        "diocese_id": 1,
        "city": "Dakar",
        "region": "Dakar",
        "address": null,
        "latitude": 14.6675,
        "longitude": -17.4372,
        "phone": null,
        "email": null,
        "website": null
    }))
    .expect("parish without mass_times should deserialize");
    assert!(parish.mass_times.is_empty());
}

#[test]
fn mass_time_payload_omits_absent_optionals() {
    let payload = MassTimePayload {
        day_of_week: "Sunday".to_owned(),
        time: "10:00".to_owned(),
        language: "French".to_owned(),
        mass_type: None,
        notes: None,
    };
    let value = serde_json::to_value(&payload).expect("payload should serialize");
    let object = value.as_object().expect("payload serializes to an object");
    assert!(!object.contains_key("mass_type"));
    assert!(!object.contains_key("notes"));
}

#[test]
fn parish_update_serializes_only_set_fields() {
    let update = ParishUpdate {
        phone: Some("+221 33 821 00 00".to_owned()),
        ..ParishUpdate::default()
    };
    let value = serde_json::to_value(&update).expect("update should serialize");
    assert_eq!(value, serde_json::json!({ "phone": "+221 33 821 00 00" }));
}

#[test]
fn registration_request_defaults_to_diocese_one() {
    assert_eq!(RegistrationRequest::default().diocese_id, 1);
}

#[test]
fn error_detail_parses_backend_rejection() {
    let err: ErrorDetail =
        serde_json::from_str(r#"{"detail":"Email ou mot de passe incorrect"}"#)
            .expect("detail body should deserialize");
    assert_eq!(err.detail, "Email ou mot de passe incorrect");
}
