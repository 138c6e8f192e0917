use super::*;

#[test]
fn admins_land_on_the_admin_panel() {
    assert_eq!(post_login_target(Role::Admin), "/admin");
}

#[test]
fn students_and_teachers_land_on_the_dashboard() {
    assert_eq!(post_login_target(Role::Student), "/dashboard");
    assert_eq!(post_login_target(Role::Teacher), "/dashboard");
}
