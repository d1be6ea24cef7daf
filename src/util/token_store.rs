//! Tab-scoped persistence of the admin credential record.
//!
//! SYSTEM CONTEXT
//! ==============
//! The record lives in browser `sessionStorage`, so it survives route
//! changes and reloads within the tab but is discarded when the tab
//! session ends — deliberately not durable device storage, to bound token
//! exposure on shared machines. The auth flows in `util::auth` are the
//! only writers; the API client reads the token to build bearer headers.
//!
//! Absence of the token key alone means "no session", whatever else is
//! still present.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use crate::net::types::LoginResponse;

const TOKEN_KEY: &str = "auth_token";
const PARISH_ID_KEY: &str = "parish_id";
const PARISH_NAME_KEY: &str = "parish_name";
const MASTER_ADMIN_KEY: &str = "is_master_admin";

/// Credential record persisted for the lifetime of the tab session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredCredentials {
    /// Opaque bearer token. Never empty for a loaded record.
    pub token: String,
    pub parish_id: Option<i64>,
    pub parish_name: Option<String>,
    pub is_master_admin: bool,
}

impl StoredCredentials {
    /// Record to persist after a successful login.
    pub fn from_login(response: &LoginResponse) -> Self {
        Self {
            token: response.access_token.clone(),
            parish_id: Some(response.parish_id),
            parish_name: Some(response.parish_name.clone()),
            is_master_admin: response.is_master_admin,
        }
    }
}

/// Rebuild a record from raw storage values. Returns `None` when the token
/// is missing or empty; other fields degrade to their absent forms.
#[cfg(any(test, feature = "hydrate"))]
fn record_from_raw(
    token: Option<String>,
    parish_id: Option<String>,
    parish_name: Option<String>,
    is_master_admin: Option<String>,
) -> Option<StoredCredentials> {
    let token = token.filter(|t| !t.is_empty())?;
    Some(StoredCredentials {
        token,
        parish_id: parish_id.and_then(|raw| raw.parse().ok()),
        parish_name,
        is_master_admin: is_master_admin.as_deref() == Some("true"),
    })
}

#[cfg(feature = "hydrate")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

/// Persist the full record. All four keys are written in one synchronous
/// pass, so no reader in this tab can observe a partial record.
pub fn save(creds: &StoredCredentials) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = session_storage() else {
            return;
        };
        let _ = storage.set_item(TOKEN_KEY, &creds.token);
        match creds.parish_id {
            Some(id) => {
                let _ = storage.set_item(PARISH_ID_KEY, &id.to_string());
            }
            None => {
                let _ = storage.remove_item(PARISH_ID_KEY);
            }
        }
        match &creds.parish_name {
            Some(name) => {
                let _ = storage.set_item(PARISH_NAME_KEY, name);
            }
            None => {
                let _ = storage.remove_item(PARISH_NAME_KEY);
            }
        }
        let _ = storage.set_item(MASTER_ADMIN_KEY, if creds.is_master_admin { "true" } else { "false" });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = creds;
    }
}

/// Remove all four keys. Idempotent.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = session_storage() else {
            return;
        };
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(PARISH_ID_KEY);
        let _ = storage.remove_item(PARISH_NAME_KEY);
        let _ = storage.remove_item(MASTER_ADMIN_KEY);
    }
}

/// Load whatever record is present, or `None` when no token is stored
/// (or outside a browser).
pub fn load() -> Option<StoredCredentials> {
    #[cfg(feature = "hydrate")]
    {
        let storage = session_storage()?;
        let read = |key: &str| storage.get_item(key).ok().flatten();
        record_from_raw(
            read(TOKEN_KEY),
            read(PARISH_ID_KEY),
            read(PARISH_NAME_KEY),
            read(MASTER_ADMIN_KEY),
        )
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
