use super::*;

fn login_response(is_master_admin: bool) -> LoginResponse {
    LoginResponse {
        access_token: "tok-1".to_owned(),
        parish_id: 12,
        parish_name: "Sainte-Anne de Thiès".to_owned(),
        is_master_admin,
    }
}

#[test]
fn default_session_is_initializing_and_loading() {
    let session = AuthSession::default();
    assert_eq!(session.phase, SessionPhase::Initializing);
    assert!(session.loading());
    assert!(!session.is_authenticated());
}

#[test]
fn anonymous_session_carries_no_parish_data() {
    let session = AuthSession::anonymous();
    assert!(!session.loading());
    assert!(!session.is_authenticated());
    assert_eq!(session.parish_id, None);
    assert_eq!(session.parish_name, None);
    assert!(!session.is_master_admin);
}

#[test]
fn from_login_copies_exactly_the_response_fields() {
    let session = AuthSession::from_login(&login_response(false));
    assert!(session.is_authenticated());
    assert!(!session.loading());
    assert_eq!(session.parish_id, Some(12));
    assert_eq!(session.parish_name.as_deref(), Some("Sainte-Anne de Thiès"));
    assert!(!session.is_master_admin);
}

#[test]
fn from_login_preserves_master_flag() {
    assert!(AuthSession::from_login(&login_response(true)).is_master_admin);
}

#[test]
fn from_store_restores_master_session() {
    let creds = StoredCredentials {
        token: "tok-2".to_owned(),
        parish_id: Some(1),
        parish_name: Some("Administration".to_owned()),
        is_master_admin: true,
    };
    let session = AuthSession::from_store(&creds);
    assert!(session.is_authenticated());
    assert!(session.is_master_admin);
    assert_eq!(session.parish_id, Some(1));
}
