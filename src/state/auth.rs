//! In-memory auth state for the current user.
//!
//! DESIGN
//! ======
//! The snapshot is read from the session store once at construction and
//! updated only by `login`/`logout`; storage is never polled afterward, so
//! concurrent tabs are not synchronized. Both mutations write through the
//! durable store before touching memory, so a reload immediately after
//! login observes a consistent session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::UserProfile;
use crate::state::session::SessionStore;

/// Reactive auth state held in an `RwSignal` provided from the App root.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserProfile>,
}

impl AuthState {
    /// Initial state, read once from durable storage at startup.
    pub fn from_session(session: &SessionStore) -> Self {
        Self { user: session.user() }
    }

    /// Record a successful login: durable store first, memory second.
    pub fn login(&mut self, session: &SessionStore, token: &str, profile: UserProfile) {
        session.set_token(token);
        session.set_user(&profile);
        self.user = Some(profile);
    }

    /// Tear down the session: durable store first, memory second.
    pub fn logout(&mut self, session: &SessionStore) {
        session.clear();
        self.user = None;
    }
}
