use super::*;

#[test]
fn field_turns_blank_into_none() {
    assert_eq!(field("  "), None);
    assert_eq!(field(" Plateau "), Some("Plateau".to_owned()));
}

#[test]
fn parse_coordinate_accepts_blank_and_numbers() {
    assert_eq!(parse_coordinate(""), Ok(None));
    assert_eq!(parse_coordinate("  "), Ok(None));
    assert_eq!(parse_coordinate("14.6928"), Ok(Some(14.6928)));
    assert_eq!(parse_coordinate("-17.4467"), Ok(Some(-17.4467)));
    assert!(parse_coordinate("quatorze").is_err());
}

#[test]
fn build_update_requires_name_and_city() {
    let result = build_update("", "Dakar", "", "", "", "", "", "", "");
    assert_eq!(result, Err("Le nom et la ville sont obligatoires."));
}

#[test]
fn build_update_drops_blank_optionals() {
    let update = build_update("Saint-Paul", "Dakar", "", "", "", "", "", "", "")
        .expect("valid update");
    assert_eq!(update.name.as_deref(), Some("Saint-Paul"));
    assert_eq!(update.region, None);
    assert_eq!(update.latitude, None);
}

#[test]
fn build_update_rejects_bad_coordinates() {
    let result = build_update("Saint-Paul", "Dakar", "", "", "", "", "", "nord", "");
    assert_eq!(result, Err("Coordonnée invalide."));
}
