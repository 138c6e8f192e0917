//! Navigation-time capability checks.
//!
//! DESIGN
//! ======
//! Guards are evaluated per navigation against in-memory auth state and
//! render the fallback view in place; they never navigate. Pages layer
//! their own on-mount hard-redirect checks on top of these.

#[cfg(test)]
#[path = "guards_test.rs"]
mod guards_test;

use leptos::prelude::*;

use crate::net::types::{Role, UserProfile};
use crate::pages::login::LoginPage;
use crate::pages::not_authorized::NotAuthorizedPage;
use crate::state::auth::AuthState;
use crate::state::session::SessionStore;

/// Authenticated-only check.
pub fn permits_user(user: Option<&UserProfile>) -> bool {
    user.is_some()
}

/// Admin-only check.
pub fn permits_admin(user: Option<&UserProfile>) -> bool {
    matches!(user, Some(profile) if profile.role == Role::Admin)
}

/// Renders children only while a user is present; otherwise renders the
/// login view in place.
#[component]
pub fn RequireUser(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    view! {
        <Show
            when=move || permits_user(auth.get().user.as_ref())
            fallback=|| view! { <LoginPage/> }
        >
            {children()}
        </Show>
    }
}

/// Renders children only for admins. A signed-in non-admin gets the
/// not-authorized view in place; with no session at all the route
/// hard-redirects to the entry point instead of soft-rendering.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<SessionStore>();

    Effect::new(move || {
        if auth.get().user.is_none() {
            session.clear();
            crate::util::nav::hard_redirect("/");
        }
    });

    view! {
        <Show
            when=move || permits_admin(auth.get().user.as_ref())
            fallback=|| view! { <NotAuthorizedPage/> }
        >
            {children()}
        </Show>
    }
}
