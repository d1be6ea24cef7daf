//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, guarding, form
//! flow) and delegates shared rendering to `components`. Public pages are
//! unguarded; every admin page installs the unauthenticated redirect and
//! renders a neutral fallback until the startup validation resolves.

pub mod change_password;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod mass_times;
pub mod master_dashboard;
pub mod news;
pub mod parish_detail;
pub mod parish_info;
pub mod register;
pub mod search;
