//! REST API client for the parish backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the bearer
//! token read from the token store for admin endpoints. Server-side (SSR):
//! stubs returning [`ApiError::Unsupported`] since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<T, ApiError>`. The backend reports
//! failures as FastAPI `{"detail": ...}` bodies; that detail is carried
//! inside the error so forms can show the backend's own French message.
//! Auth flows treat every variant identically (collapse to Anonymous) —
//! the distinction exists for user-facing messaging only.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{
    ApiMessage, CredentialsUpdate, LoginResponse, MassTime, MassTimePayload, NewsItem,
    NewsPayload, Parish, ParishAdmin, ParishUpdate, PasswordChange, PendingParish,
    RegistrationRequest, RegistrationResponse,
};
#[cfg(feature = "hydrate")]
use super::types::ErrorDetail;
#[cfg(feature = "hydrate")]
use crate::util::token_store;

/// Failure taxonomy for backend calls.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Transport failure before any HTTP status was received.
    #[error("Erreur réseau: {0}")]
    Network(String),
    /// 401 — token or credentials rejected.
    #[error("{0}")]
    Unauthorized(String),
    /// 403 — recognized account without the required rights (e.g. a
    /// registration still pending approval).
    #[error("{0}")]
    Forbidden(String),
    /// Any other non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// Request body could not be serialized.
    #[error("Corps de requête invalide: {0}")]
    Encode(String),
    /// Response body could not be parsed.
    #[error("Réponse du serveur illisible: {0}")]
    Decode(String),
    /// Client-side deadline elapsed (startup validation probe).
    #[error("Le serveur ne répond pas")]
    Timeout,
    /// Called outside a browser (SSR or native test build).
    #[error("Requêtes indisponibles hors navigateur")]
    Unsupported,
}

/// Whether a request carries the stored bearer token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Auth {
    Public,
    Bearer,
}

/// Map an HTTP status plus optional backend detail to an [`ApiError`].
#[cfg(any(test, feature = "hydrate"))]
fn error_from_status(status: u16, detail: Option<String>) -> ApiError {
    match status {
        401 => ApiError::Unauthorized(
            detail.unwrap_or_else(|| "Session expirée ou identifiants invalides.".to_owned()),
        ),
        403 => ApiError::Forbidden(detail.unwrap_or_else(|| "Accès refusé.".to_owned())),
        _ => ApiError::Status {
            status,
            message: detail.unwrap_or_else(|| format!("Erreur serveur ({status})")),
        },
    }
}

/// Percent-encode a query value (RFC 3986 unreserved characters pass through).
fn encode_query(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

fn parishes_endpoint(city: Option<&str>) -> String {
    match city {
        Some(city) if !city.is_empty() => format!("/parishes?city={}", encode_query(city)),
        _ => "/parishes".to_owned(),
    }
}

fn parish_endpoint(id: i64) -> String {
    format!("/parishes/{id}")
}

fn nearby_endpoint(latitude: f64, longitude: f64, radius_km: f64) -> String {
    format!("/parishes/nearby/{latitude}/{longitude}?radius_km={radius_km}")
}

fn parish_news_endpoint(id: i64) -> String {
    format!("/parishes/{id}/news")
}

fn mass_times_endpoint(parish_id: i64) -> String {
    format!("/admin/parishes/{parish_id}/mass-times")
}

fn mass_time_endpoint(parish_id: i64, mass_time_id: i64) -> String {
    format!("/admin/parishes/{parish_id}/mass-times/{mass_time_id}")
}

fn admin_news_endpoint(parish_id: i64) -> String {
    format!("/admin/parishes/{parish_id}/news")
}

fn admin_news_item_endpoint(parish_id: i64, news_id: i64) -> String {
    format!("/admin/parishes/{parish_id}/news/{news_id}")
}

fn parish_update_endpoint(parish_id: i64) -> String {
    format!("/admin/parishes/{parish_id}")
}

fn master_parish_endpoint(parish_id: i64) -> String {
    format!("/admin/master/parishes/{parish_id}")
}

fn master_credentials_endpoint(parish_id: i64) -> String {
    format!("/admin/master/parishes/{parish_id}/credentials")
}

fn master_approve_endpoint(parish_id: i64) -> String {
    format!("/admin/master/parishes/{parish_id}/approve")
}

fn master_reject_endpoint(parish_id: i64) -> String {
    format!("/admin/master/parishes/{parish_id}/reject")
}

// ---------------------------------------------------------------------------
// Transport helpers (hydrate: gloo-net; otherwise: stubs)
// ---------------------------------------------------------------------------

#[cfg(feature = "hydrate")]
fn attach_token(
    builder: gloo_net::http::RequestBuilder,
    auth: Auth,
) -> gloo_net::http::RequestBuilder {
    match (auth, token_store::load()) {
        (Auth::Bearer, Some(creds)) => {
            builder.header("Authorization", &format!("Bearer {}", creds.token))
        }
        _ => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn decode_response<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !resp.ok() {
        let detail = resp.json::<ErrorDetail>().await.ok().map(|d| d.detail);
        return Err(error_from_status(resp.status(), detail));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(path: &str, auth: Auth) -> Result<T, ApiError> {
    let resp = attach_token(gloo_net::http::Request::get(path), auth)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode_response(resp).await
}

#[cfg(not(feature = "hydrate"))]
async fn get_json<T: serde::de::DeserializeOwned>(path: &str, auth: Auth) -> Result<T, ApiError> {
    let _ = (path, auth);
    Err(ApiError::Unsupported)
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::de::DeserializeOwned, B: serde::Serialize>(
    path: &str,
    body: &B,
    auth: Auth,
) -> Result<T, ApiError> {
    let resp = attach_token(gloo_net::http::Request::post(path), auth)
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode_response(resp).await
}

#[cfg(not(feature = "hydrate"))]
async fn post_json<T: serde::de::DeserializeOwned, B: serde::Serialize>(
    path: &str,
    body: &B,
    auth: Auth,
) -> Result<T, ApiError> {
    let _ = (path, body, auth);
    Err(ApiError::Unsupported)
}

#[cfg(feature = "hydrate")]
async fn put_json<T: serde::de::DeserializeOwned, B: serde::Serialize>(
    path: &str,
    body: &B,
    auth: Auth,
) -> Result<T, ApiError> {
    let resp = attach_token(gloo_net::http::Request::put(path), auth)
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode_response(resp).await
}

#[cfg(not(feature = "hydrate"))]
async fn put_json<T: serde::de::DeserializeOwned, B: serde::Serialize>(
    path: &str,
    body: &B,
    auth: Auth,
) -> Result<T, ApiError> {
    let _ = (path, body, auth);
    Err(ApiError::Unsupported)
}

#[cfg(feature = "hydrate")]
async fn delete_json<T: serde::de::DeserializeOwned>(path: &str, auth: Auth) -> Result<T, ApiError> {
    let resp = attach_token(gloo_net::http::Request::delete(path), auth)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode_response(resp).await
}

#[cfg(not(feature = "hydrate"))]
async fn delete_json<T: serde::de::DeserializeOwned>(path: &str, auth: Auth) -> Result<T, ApiError> {
    let _ = (path, auth);
    Err(ApiError::Unsupported)
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

/// Authenticate a parish admin via `POST /auth/login`.
///
/// # Errors
///
/// Propagates the backend's rejection detail unchanged; the caller decides
/// what to do with the session.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let payload = serde_json::json!({ "email": email, "password": password });
    post_json("/auth/login", &payload, Auth::Public).await
}

/// Submit a parish self-registration via `POST /auth/register`.
///
/// # Errors
///
/// Returns the backend rejection (e.g. duplicate admin email).
pub async fn register(request: &RegistrationRequest) -> Result<RegistrationResponse, ApiError> {
    post_json("/auth/register", request, Auth::Public).await
}

/// Fetch the authenticated parish via `GET /admin/parish`.
///
/// Also used as the token-validity probe at startup: any error means the
/// stored token must be discarded.
///
/// # Errors
///
/// [`ApiError::Unauthorized`] for a stale or missing token.
pub async fn fetch_my_parish() -> Result<Parish, ApiError> {
    get_json("/admin/parish", Auth::Bearer).await
}

/// Change the authenticated admin's own password.
///
/// # Errors
///
/// [`ApiError::Unauthorized`] when the current password is wrong.
pub async fn change_password(current: &str, new: &str) -> Result<ApiMessage, ApiError> {
    let payload = PasswordChange {
        current_password: current.to_owned(),
        new_password: new.to_owned(),
    };
    put_json("/admin/change-password", &payload, Auth::Bearer).await
}

// ---------------------------------------------------------------------------
// Public directory
// ---------------------------------------------------------------------------

/// List parishes, optionally filtered by city substring.
///
/// # Errors
///
/// Network or backend failure.
pub async fn fetch_parishes(city: Option<&str>) -> Result<Vec<Parish>, ApiError> {
    get_json(&parishes_endpoint(city), Auth::Public).await
}

/// Fetch a single parish with its mass times.
///
/// # Errors
///
/// [`ApiError::Status`] with 404 when the parish does not exist.
pub async fn fetch_parish(id: i64) -> Result<Parish, ApiError> {
    get_json(&parish_endpoint(id), Auth::Public).await
}

/// Find parishes within `radius_km` of a coordinate. The distance search is
/// delegated entirely to the backend.
///
/// # Errors
///
/// Network or backend failure.
pub async fn fetch_nearby(
    latitude: f64,
    longitude: f64,
    radius_km: f64,
) -> Result<Vec<Parish>, ApiError> {
    get_json(&nearby_endpoint(latitude, longitude, radius_km), Auth::Public).await
}

/// Fetch the public news feed of a parish.
///
/// # Errors
///
/// Network or backend failure.
pub async fn fetch_parish_news(id: i64) -> Result<Vec<NewsItem>, ApiError> {
    get_json(&parish_news_endpoint(id), Auth::Public).await
}

// ---------------------------------------------------------------------------
// Parish self-management
// ---------------------------------------------------------------------------

/// Fetch the authenticated parish's news (including inactive items).
///
/// # Errors
///
/// [`ApiError::Unauthorized`] for a stale token.
pub async fn fetch_my_news() -> Result<Vec<NewsItem>, ApiError> {
    get_json("/admin/parish/news", Auth::Bearer).await
}

/// Update the authenticated parish's record.
///
/// # Errors
///
/// Backend validation or authorization failure.
pub async fn update_parish(parish_id: i64, update: &ParishUpdate) -> Result<Parish, ApiError> {
    put_json(&parish_update_endpoint(parish_id), update, Auth::Bearer).await
}

/// Add a mass time to the parish schedule.
///
/// # Errors
///
/// Backend validation or authorization failure.
pub async fn add_mass_time(
    parish_id: i64,
    payload: &MassTimePayload,
) -> Result<MassTime, ApiError> {
    post_json(&mass_times_endpoint(parish_id), payload, Auth::Bearer).await
}

/// Update an existing mass time.
///
/// # Errors
///
/// Backend validation or authorization failure.
pub async fn update_mass_time(
    parish_id: i64,
    mass_time_id: i64,
    payload: &MassTimePayload,
) -> Result<MassTime, ApiError> {
    put_json(&mass_time_endpoint(parish_id, mass_time_id), payload, Auth::Bearer).await
}

/// Delete a mass time.
///
/// # Errors
///
/// Backend validation or authorization failure.
pub async fn delete_mass_time(parish_id: i64, mass_time_id: i64) -> Result<ApiMessage, ApiError> {
    delete_json(&mass_time_endpoint(parish_id, mass_time_id), Auth::Bearer).await
}

/// Publish a news item.
///
/// # Errors
///
/// Backend validation or authorization failure.
pub async fn add_news(parish_id: i64, payload: &NewsPayload) -> Result<NewsItem, ApiError> {
    post_json(&admin_news_endpoint(parish_id), payload, Auth::Bearer).await
}

/// Update a news item.
///
/// # Errors
///
/// Backend validation or authorization failure.
pub async fn update_news(
    parish_id: i64,
    news_id: i64,
    payload: &NewsPayload,
) -> Result<NewsItem, ApiError> {
    put_json(&admin_news_item_endpoint(parish_id, news_id), payload, Auth::Bearer).await
}

/// Delete a news item.
///
/// # Errors
///
/// Backend validation or authorization failure.
pub async fn delete_news(parish_id: i64, news_id: i64) -> Result<ApiMessage, ApiError> {
    delete_json(&admin_news_item_endpoint(parish_id, news_id), Auth::Bearer).await
}

// ---------------------------------------------------------------------------
// Master administration
// ---------------------------------------------------------------------------

/// List every parish with admin account details (master only).
///
/// # Errors
///
/// [`ApiError::Forbidden`] for non-master accounts.
pub async fn fetch_all_parishes() -> Result<Vec<ParishAdmin>, ApiError> {
    get_json("/admin/master/parishes", Auth::Bearer).await
}

/// Create a parish with its admin credentials (master only).
///
/// # Errors
///
/// Backend validation or authorization failure.
pub async fn create_parish(request: &RegistrationRequest) -> Result<ParishAdmin, ApiError> {
    post_json("/admin/master/parishes", request, Auth::Bearer).await
}

/// Update any parish's record (master only).
///
/// # Errors
///
/// Backend validation or authorization failure.
pub async fn update_parish_master(
    parish_id: i64,
    update: &ParishUpdate,
) -> Result<ParishAdmin, ApiError> {
    put_json(&master_parish_endpoint(parish_id), update, Auth::Bearer).await
}

/// Delete a parish (master only).
///
/// # Errors
///
/// Backend validation or authorization failure.
pub async fn delete_parish(parish_id: i64) -> Result<ApiMessage, ApiError> {
    delete_json(&master_parish_endpoint(parish_id), Auth::Bearer).await
}

/// Replace a parish admin's email and/or password (master only).
///
/// # Errors
///
/// Backend validation or authorization failure.
pub async fn update_credentials(
    parish_id: i64,
    update: &CredentialsUpdate,
) -> Result<ApiMessage, ApiError> {
    put_json(&master_credentials_endpoint(parish_id), update, Auth::Bearer).await
}

/// List registrations awaiting approval (master only).
///
/// # Errors
///
/// [`ApiError::Forbidden`] for non-master accounts.
pub async fn fetch_pending_registrations() -> Result<Vec<PendingParish>, ApiError> {
    get_json("/admin/master/pending", Auth::Bearer).await
}

/// Approve a pending registration (master only).
///
/// # Errors
///
/// Backend validation or authorization failure.
pub async fn approve_parish(parish_id: i64) -> Result<ApiMessage, ApiError> {
    put_json(&master_approve_endpoint(parish_id), &serde_json::json!({}), Auth::Bearer).await
}

/// Reject a pending registration (master only).
///
/// # Errors
///
/// Backend validation or authorization failure.
pub async fn reject_parish(parish_id: i64) -> Result<ApiMessage, ApiError> {
    put_json(&master_reject_endpoint(parish_id), &serde_json::json!({}), Auth::Bearer).await
}
