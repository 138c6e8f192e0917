//! Durable session storage for the bearer token and user profile.
//!
//! DESIGN
//! ======
//! An explicitly constructed store object passed by context to all callers,
//! rather than free functions over global storage. Operations are
//! synchronous and idempotent, and perform no validation of what they
//! store; unreadable stored profiles simply read back as absent.
//!
//! Backing: browser `localStorage` when hydrated, a thread-local map
//! otherwise so server rendering stays deterministic and the persistence
//! contract is testable natively.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::UserProfile;

#[cfg(not(feature = "hydrate"))]
use std::cell::RefCell;
#[cfg(not(feature = "hydrate"))]
use std::collections::HashMap;

const TOKEN_KEY: &str = "campus360_token";
const USER_KEY: &str = "campus360_user";

#[cfg(not(feature = "hydrate"))]
thread_local! {
    static ENTRIES: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
}

/// Handle to the durable session store. Cheap to copy; every handle sees
/// the same underlying storage.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionStore;

impl SessionStore {
    pub fn new() -> Self {
        Self
    }

    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            ENTRIES.with(|entries| entries.borrow().get(key).cloned())
        }
    }

    fn write(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            ENTRIES.with(|entries| {
                entries.borrow_mut().insert(key.to_owned(), value.to_owned());
            });
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            ENTRIES.with(|entries| {
                entries.borrow_mut().remove(key);
            });
        }
    }

    pub fn token(&self) -> Option<String> {
        self.read(TOKEN_KEY)
    }

    pub fn set_token(&self, token: &str) {
        self.write(TOKEN_KEY, token);
    }

    pub fn clear_token(&self) {
        self.remove(TOKEN_KEY);
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.read(USER_KEY).and_then(|raw| serde_json::from_str(&raw).ok())
    }

    pub fn set_user(&self, user: &UserProfile) {
        if let Ok(raw) = serde_json::to_string(user) {
            self.write(USER_KEY, &raw);
        }
    }

    pub fn clear_user(&self) {
        self.remove(USER_KEY);
    }

    /// Remove both halves of the session.
    pub fn clear(&self) {
        self.clear_token();
        self.clear_user();
    }
}
