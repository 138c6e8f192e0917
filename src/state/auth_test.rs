use super::*;
use crate::net::types::Role;

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
fn initial_state_reads_stored_user_once() {
    let session = SessionStore::new();
    assert_eq!(AuthState::from_session(&session).user, None);

    session.set_user(&profile(Role::Teacher));
    let state = AuthState::from_session(&session);
    assert_eq!(state.user, Some(profile(Role::Teacher)));
}

#[test]
fn login_writes_through_store_before_memory() {
    let session = SessionStore::new();
    let mut state = AuthState::default();

    state.login(&session, "tok-1", profile(Role::Student));

    assert_eq!(session.token().as_deref(), Some("tok-1"));
    assert_eq!(session.user(), Some(profile(Role::Student)));
    assert_eq!(state.user, Some(profile(Role::Student)));

    // A reload right after login sees the same session.
    let reloaded = AuthState::from_session(&SessionStore::new());
    assert_eq!(reloaded.user, Some(profile(Role::Student)));
}

#[test]
fn logout_clears_store_and_memory() {
    let session = SessionStore::new();
    let mut state = AuthState::default();
    state.login(&session, "tok-1", profile(Role::Admin));

    state.logout(&session);

    assert_eq!(session.token(), None);
    assert_eq!(session.user(), None);
    assert_eq!(state.user, None);
}
