use super::*;

fn profile(role: Role) -> UserProfile {
    UserProfile {
        id: "u-1".to_owned(),
        email: "a@b.com".to_owned(),
        full_name: "Ada Lovelace".to_owned(),
        role,
        created_at: None,
    }
}

#[test]
fn user_guard_requires_any_signed_in_user() {
    assert!(!permits_user(None));
    assert!(permits_user(Some(&profile(Role::Student))));
    assert!(permits_user(Some(&profile(Role::Admin))));
}

#[test]
fn admin_guard_requires_the_admin_role() {
    assert!(!permits_admin(None));
    assert!(!permits_admin(Some(&profile(Role::Student))));
    assert!(!permits_admin(Some(&profile(Role::Teacher))));
    assert!(permits_admin(Some(&profile(Role::Admin))));
}
