//! Auth-session state for the admin console.
//!
//! SYSTEM CONTEXT
//! ==============
//! A single `RwSignal<AuthSession>` is provided via context at the
//! application root. Route guards and the admin navbar read it; the auth
//! flows in `util::auth` are the only writers. The session is transient —
//! it is reconstructed on every application load by probing the backend
//! with whatever the token store holds.
//!
//! The `is_master_admin` flag is a presentation hint only: it decides which
//! navigation and dashboard a session resolves to, never whether a
//! privileged call succeeds. The server re-checks every admin operation.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::LoginResponse;
use crate::util::token_store::StoredCredentials;

/// Lifecycle phase of the client's belief about authentication.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// Startup validation call in flight; guards must not redirect yet.
    #[default]
    Initializing,
    /// A token was accepted by the backend on the most recent validation
    /// or login call.
    Authenticated,
    /// No usable session.
    Anonymous,
}

/// In-memory session, reconstructed on each application load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthSession {
    pub phase: SessionPhase,
    pub parish_id: Option<i64>,
    pub parish_name: Option<String>,
    pub is_master_admin: bool,
}

impl AuthSession {
    /// True only when the backend accepted the token on the most recent
    /// validation or login call.
    pub fn is_authenticated(&self) -> bool {
        self.phase == SessionPhase::Authenticated
    }

    /// True while the startup validation call has not resolved yet.
    pub fn loading(&self) -> bool {
        self.phase == SessionPhase::Initializing
    }

    /// Terminal no-session state. Carries no parish data.
    pub fn anonymous() -> Self {
        Self { phase: SessionPhase::Anonymous, ..Self::default() }
    }

    /// Authenticated state populated from the stored credential record,
    /// after the startup probe accepted its token.
    pub fn from_store(creds: &StoredCredentials) -> Self {
        Self {
            phase: SessionPhase::Authenticated,
            parish_id: creds.parish_id,
            parish_name: creds.parish_name.clone(),
            is_master_admin: creds.is_master_admin,
        }
    }

    /// Authenticated state populated from a fresh login response.
    pub fn from_login(response: &LoginResponse) -> Self {
        Self {
            phase: SessionPhase::Authenticated,
            parish_id: Some(response.parish_id),
            parish_name: Some(response.parish_name.clone()),
            is_master_admin: response.is_master_admin,
        }
    }
}
