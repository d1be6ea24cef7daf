//! Role-based navigation: routes and link sets per session tier.
//!
//! SYSTEM CONTEXT
//! ==============
//! Which dashboard a login resolves to and which links the admin navbar
//! shows branch solely on `is_master_admin`. This is presentation only —
//! hiding a link never protects anything; the server re-authorizes every
//! privileged call.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

pub const LOGIN_ROUTE: &str = "/admin/login";
pub const REGISTER_ROUTE: &str = "/admin/register";
pub const DASHBOARD_ROUTE: &str = "/admin/dashboard";
pub const MASS_TIMES_ROUTE: &str = "/admin/mass-times";
pub const NEWS_ROUTE: &str = "/admin/news";
pub const PARISH_INFO_ROUTE: &str = "/admin/parish-info";
pub const CHANGE_PASSWORD_ROUTE: &str = "/admin/change-password";
pub const MASTER_DASHBOARD_ROUTE: &str = "/admin/master-dashboard";

/// A navbar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub to: &'static str,
    pub label: &'static str,
}

/// Where a fresh login lands: master admins on the cross-parish view,
/// parish admins on their own dashboard.
pub fn post_login_destination(is_master_admin: bool) -> &'static str {
    if is_master_admin { MASTER_DASHBOARD_ROUTE } else { DASHBOARD_ROUTE }
}

/// Navbar links for the session tier. Master admins see only cross-parish
/// management plus the password page; parish-specific management links are
/// hidden for them.
pub fn nav_links(is_master_admin: bool) -> Vec<NavLink> {
    let mut links = Vec::new();
    if is_master_admin {
        links.push(NavLink { to: MASTER_DASHBOARD_ROUTE, label: "Gestion des Paroisses" });
    } else {
        links.push(NavLink { to: DASHBOARD_ROUTE, label: "Tableau de bord" });
        links.push(NavLink { to: MASS_TIMES_ROUTE, label: "Horaires des messes" });
        links.push(NavLink { to: NEWS_ROUTE, label: "Actualités" });
        links.push(NavLink { to: PARISH_INFO_ROUTE, label: "Informations" });
    }
    links.push(NavLink { to: CHANGE_PASSWORD_ROUTE, label: "Mot de passe" });
    links
}
