//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The only state shared across routes is the auth session; page-local
//! concerns (form drafts, list caches) stay inside their page components.

pub mod auth;
