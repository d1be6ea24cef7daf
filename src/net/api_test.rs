use super::*;

#[test]
fn error_from_status_maps_401_with_backend_detail() {
    let err = error_from_status(401, Some("Email ou mot de passe incorrect".to_owned()));
    assert_eq!(err, ApiError::Unauthorized("Email ou mot de passe incorrect".to_owned()));
    assert_eq!(err.to_string(), "Email ou mot de passe incorrect");
}

#[test]
fn error_from_status_maps_401_without_detail_to_default_message() {
    let err = error_from_status(401, None);
    assert_eq!(
        err,
        ApiError::Unauthorized("Session expirée ou identifiants invalides.".to_owned())
    );
}

#[test]
fn error_from_status_maps_403_to_forbidden() {
    let err = error_from_status(403, Some("Compte en attente d'approbation".to_owned()));
    assert_eq!(err, ApiError::Forbidden("Compte en attente d'approbation".to_owned()));
}

#[test]
fn error_from_status_keeps_other_statuses() {
    let err = error_from_status(500, None);
    assert_eq!(
        err,
        ApiError::Status { status: 500, message: "Erreur serveur (500)".to_owned() }
    );
}

#[test]
fn encode_query_passes_unreserved_and_escapes_the_rest() {
    assert_eq!(encode_query("Dakar"), "Dakar");
    assert_eq!(encode_query("Thiès"), "Thi%C3%A8s");
    assert_eq!(encode_query("Saint Louis"), "Saint%20Louis");
}

#[test]
fn parishes_endpoint_with_and_without_city() {
    assert_eq!(parishes_endpoint(None), "/parishes");
    assert_eq!(parishes_endpoint(Some("")), "/parishes");
    assert_eq!(parishes_endpoint(Some("Dakar")), "/parishes?city=Dakar");
}

#[test]
fn nearby_endpoint_embeds_coordinates_and_radius() {
    assert_eq!(
        nearby_endpoint(14.6937, -17.4441, 10.0),
        "/parishes/nearby/14.6937/-17.4441?radius_km=10"
    );
}

#[test]
fn admin_endpoints_nest_parish_and_item_ids() {
    assert_eq!(mass_times_endpoint(3), "/admin/parishes/3/mass-times");
    assert_eq!(mass_time_endpoint(3, 7), "/admin/parishes/3/mass-times/7");
    assert_eq!(admin_news_item_endpoint(3, 9), "/admin/parishes/3/news/9");
    assert_eq!(master_credentials_endpoint(5), "/admin/master/parishes/5/credentials");
    assert_eq!(master_approve_endpoint(5), "/admin/master/parishes/5/approve");
    assert_eq!(master_reject_endpoint(5), "/admin/master/parishes/5/reject");
}
