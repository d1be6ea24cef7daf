use super::*;
use crate::state::auth::SessionPhase;

#[test]
fn should_redirect_unauth_when_resolved_and_anonymous() {
    assert!(should_redirect_unauth(&AuthSession::anonymous()));
}

#[test]
fn should_not_redirect_while_startup_validation_is_loading() {
    let session = AuthSession::default();
    assert_eq!(session.phase, SessionPhase::Initializing);
    assert!(!should_redirect_unauth(&session));
}

#[test]
fn should_not_redirect_when_authenticated() {
    let session = AuthSession {
        phase: SessionPhase::Authenticated,
        parish_id: Some(3),
        parish_name: Some("Saint-Paul de Grand-Yoff".to_owned()),
        is_master_admin: false,
    };
    assert!(!should_redirect_unauth(&session));
}
