//! Auth session lifecycle and route guarding.
//!
//! SYSTEM CONTEXT
//! ==============
//! These are the only writers of the shared `RwSignal<AuthSession>`. The
//! lifecycle is `Initializing -> {Authenticated, Anonymous}` with
//! `Authenticated -> Anonymous` on logout or validation failure; there is
//! exactly one suspension point at startup (the token probe) and one per
//! user-initiated login.
//!
//! ERROR HANDLING
//! ==============
//! Any failure during login or validation — transport error, rejected
//! credentials, forbidden account, timeout — collapses to Anonymous with
//! the token store cleared. The error itself is propagated to the caller
//! for messaging; it is never used to keep a partial session alive.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::api::{self, ApiError};
use crate::net::types::LoginResponse;
use crate::state::auth::AuthSession;
use crate::util::nav;
use crate::util::token_store::{self, StoredCredentials};

/// Deadline for the startup token probe. A hung call would otherwise keep
/// every guarded route in its loading fallback indefinitely.
pub const STARTUP_PROBE_TIMEOUT_SECS: u64 = 8;

/// True when auth has resolved and no session exists — the condition under
/// which a guarded route must bounce to the login page. Never true while
/// the startup validation is still loading.
pub fn should_redirect_unauth(session: &AuthSession) -> bool {
    !session.loading() && !session.is_authenticated()
}

/// Redirect to the login page whenever auth has resolved with no session.
/// Guarded pages install this once; the effect re-runs on session changes
/// (e.g. logout from the navbar).
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthSession>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(nav::LOGIN_ROUTE, NavigateOptions::default());
        }
    });
}

/// Startup reconciliation: derive the in-memory session from the token
/// store by probing the backend.
///
/// No stored token means Anonymous immediately. A stored token is probed
/// against `GET /admin/parish` under a client-side deadline; on success the
/// session is populated from the stored record, on any failure the store is
/// cleared and the session ends Anonymous — never "authenticated with
/// stale data".
pub async fn restore_session(auth: RwSignal<AuthSession>) {
    let Some(creds) = token_store::load() else {
        auth.set(AuthSession::anonymous());
        return;
    };

    match validate_token().await {
        Ok(_parish) => auth.set(AuthSession::from_store(&creds)),
        Err(err) => {
            log::warn!("startup token validation failed: {err}");
            token_store::clear();
            auth.set(AuthSession::anonymous());
        }
    }
}

#[cfg(feature = "hydrate")]
async fn validate_token() -> Result<crate::net::types::Parish, ApiError> {
    use futures::FutureExt;

    let probe = api::fetch_my_parish().fuse();
    let deadline =
        gloo_timers::future::sleep(std::time::Duration::from_secs(STARTUP_PROBE_TIMEOUT_SECS))
            .fuse();
    futures::pin_mut!(probe, deadline);
    futures::select! {
        result = probe => result,
        _ = deadline => Err(ApiError::Timeout),
    }
}

#[cfg(not(feature = "hydrate"))]
async fn validate_token() -> Result<crate::net::types::Parish, ApiError> {
    Err(ApiError::Unsupported)
}

/// Authenticate and transition to Authenticated.
///
/// On success the credential record is persisted before the session flips,
/// and the raw response is returned so the caller can pick the post-login
/// destination from `is_master_admin`. On failure `logout` runs first so no
/// partial state survives, then the error is propagated unchanged.
///
/// Overlapping calls are prevented at the UI layer (the login form disables
/// its submit control while a call is in flight); if two calls do race, the
/// last response to resolve wins.
///
/// # Errors
///
/// The backend rejection or transport failure, untouched.
pub async fn login(
    auth: RwSignal<AuthSession>,
    email: &str,
    password: &str,
) -> Result<LoginResponse, ApiError> {
    match api::login(email, password).await {
        Ok(response) => {
            token_store::save(&StoredCredentials::from_login(&response));
            auth.set(AuthSession::from_login(&response));
            Ok(response)
        }
        Err(err) => {
            logout(auth);
            Err(err)
        }
    }
}

/// Clear the token store and reset the session to Anonymous. Safe from any
/// state, including before startup validation has resolved.
pub fn logout(auth: RwSignal<AuthSession>) {
    token_store::clear();
    auth.set(AuthSession::anonymous());
}
