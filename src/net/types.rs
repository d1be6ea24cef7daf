//! Wire DTOs for the parish backend.
//!
//! DESIGN
//! ======
//! These types intentionally mirror the backend response schemas so serde
//! round-trips stay lossless. Times arrive as `HH:MM:SS` strings and dates
//! as ISO 8601 strings; the client only ever displays them, so they are kept
//! as strings rather than parsed into chrono types.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Successful response from `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer token for subsequent admin calls.
    pub access_token: String,
    /// Parish the authenticated account manages.
    pub parish_id: i64,
    /// Display name of that parish.
    pub parish_name: String,
    /// Whether the account is a master administrator.
    #[serde(default)]
    pub is_master_admin: bool,
}

/// A single scheduled mass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MassTime {
    pub id: i64,
    /// English day name (`"Sunday"` .. `"Saturday"`); translated at render time.
    pub day_of_week: String,
    /// Time of day as `HH:MM:SS`.
    pub time: String,
    /// Celebration language (e.g. `"French"`, `"Wolof"`).
    pub language: String,
    /// Optional mass type label (e.g. `"Main Mass"`).
    pub mass_type: Option<String>,
    pub notes: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Payload for creating or updating a mass time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MassTimePayload {
    pub day_of_week: String,
    /// `HH:MM` as entered in the form; the backend accepts it as a time.
    pub time: String,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mass_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A parish as returned by the public endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Parish {
    pub id: i64,
    pub name: String,
    pub diocese_id: i64,
    pub city: String,
    pub region: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    #[serde(default)]
    pub mass_times: Vec<MassTime>,
}

/// Partial update of a parish's own record (`PUT /admin/parishes/{id}`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ParishUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// A news item attached to a parish.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// `"General"`, `"Event"` or `"Announcement"`.
    pub category: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// ISO 8601 timestamp.
    pub publish_date: String,
}

/// Payload for creating or updating a news item.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsPayload {
    pub title: String,
    pub content: String,
    pub category: String,
}

/// Self-registration request (`POST /auth/register`). Also the shape used by
/// master admins to create a parish directly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub name: String,
    pub diocese_id: i64,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub admin_email: String,
    pub admin_password: String,
}

impl Default for RegistrationRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            diocese_id: 1,
            city: String::new(),
            region: None,
            address: None,
            latitude: None,
            longitude: None,
            phone: None,
            email: None,
            website: None,
            admin_email: String::new(),
            admin_password: String::new(),
        }
    }
}

/// Acknowledgement of a pending registration. No token is issued; the
/// account becomes usable only after master-admin approval.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegistrationResponse {
    pub message: String,
    pub parish_id: i64,
    pub parish_name: String,
}

/// Parish row in the master-admin list, including admin account details.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParishAdmin {
    pub id: i64,
    pub name: String,
    pub diocese_id: i64,
    pub city: String,
    pub region: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub admin_email: String,
    pub is_approved: bool,
    pub created_at: String,
}

/// Pending self-registration awaiting master-admin review.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PendingParish {
    pub id: i64,
    pub name: String,
    pub diocese_id: i64,
    pub city: String,
    pub region: Option<String>,
    pub address: Option<String>,
    pub admin_email: String,
    pub is_approved: bool,
    pub created_at: String,
}

/// Master-admin update of a parish admin account (`PUT .../credentials`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CredentialsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_password: Option<String>,
}

/// Own-password change (`PUT /admin/change-password`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

/// Generic `{"message": ...}` acknowledgement body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// FastAPI-style error body (`{"detail": ...}`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

fn default_true() -> bool {
    true
}
