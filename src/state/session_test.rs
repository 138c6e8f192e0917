use super::*;
use crate::net::types::Role;

fn profile() -> UserProfile {
    UserProfile {
        id: "u-1".to_owned(),
        email: "a@b.com".to_owned(),
        full_name: "Ada Lovelace".to_owned(),
        role: Role::Student,
        created_at: None,
    }
}

#[test]
fn token_round_trips_and_clears() {
    let store = SessionStore::new();
    assert_eq!(store.token(), None);

    store.set_token("tok-1");
    assert_eq!(store.token().as_deref(), Some("tok-1"));

    store.set_token("tok-2");
    assert_eq!(store.token().as_deref(), Some("tok-2"));

    store.clear_token();
    assert_eq!(store.token(), None);
    store.clear_token();
    assert_eq!(store.token(), None);
}

#[test]
fn user_round_trips_through_storage() {
    let store = SessionStore::new();
    assert_eq!(store.user(), None);

    store.set_user(&profile());
    assert_eq!(store.user(), Some(profile()));

    store.clear_user();
    assert_eq!(store.user(), None);
}

#[test]
fn fresh_handle_observes_persisted_session() {
    let store = SessionStore::new();
    store.set_token("tok-persist");
    store.set_user(&profile());

    // A reload constructs a new handle over the same durable storage.
    let reloaded = SessionStore::new();
    assert_eq!(reloaded.token().as_deref(), Some("tok-persist"));
    assert_eq!(reloaded.user(), Some(profile()));
}

#[test]
fn garbage_stored_profile_reads_back_as_absent() {
    let store = SessionStore::new();
    store.write(USER_KEY, "not json at all");
    assert_eq!(store.user(), None);
}

#[test]
fn clear_removes_both_halves() {
    let store = SessionStore::new();
    store.set_token("tok");
    store.set_user(&profile());

    store.clear();
    assert_eq!(store.token(), None);
    assert_eq!(store.user(), None);
}
