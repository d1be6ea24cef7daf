//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns all HTTP calls and the error taxonomy; `types` defines the
//! wire schema shared with the backend. There is no websocket surface —
//! every interaction is plain request/response.

pub mod api;
pub mod types;
