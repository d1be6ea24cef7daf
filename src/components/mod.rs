//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render chrome shared across pages; route-level orchestration
//! stays in `pages`.

pub mod admin_navbar;
pub mod confirm_dialog;
pub mod loading_spinner;
