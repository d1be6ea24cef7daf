use super::*;

#[test]
fn master_admin_lands_on_master_dashboard() {
    assert_eq!(post_login_destination(true), "/admin/master-dashboard");
    assert_eq!(post_login_destination(false), "/admin/dashboard");
}

#[test]
fn master_admin_sees_only_cross_parish_link_plus_password() {
    let links = nav_links(true);
    let targets: Vec<&str> = links.iter().map(|l| l.to).collect();
    assert_eq!(targets, vec!["/admin/master-dashboard", "/admin/change-password"]);
}

#[test]
fn parish_admin_sees_full_self_management_navigation() {
    let links = nav_links(false);
    let targets: Vec<&str> = links.iter().map(|l| l.to).collect();
    assert_eq!(
        targets,
        vec![
            "/admin/dashboard",
            "/admin/mass-times",
            "/admin/news",
            "/admin/parish-info",
            "/admin/change-password",
        ]
    );
}

#[test]
fn parish_admin_never_sees_master_dashboard_link() {
    assert!(nav_links(false).iter().all(|l| l.to != MASTER_DASHBOARD_ROUTE));
}
