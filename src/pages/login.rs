//! Login page: email + password form against `POST /auth/login`.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful login stores the token, fetches the profile via `/qr/me`,
//! records both through auth state, and hard-navigates to the role's
//! landing page. Failures surface the backend `detail` inline.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
#[cfg(feature = "hydrate")]
use crate::net::error::ApiError;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::state::session::SessionStore;

/// Landing route after login: admins go to the panel, everyone else to
/// the dashboard.
#[cfg(any(test, feature = "hydrate"))]
fn post_login_target(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin",
        Role::Student | Role::Teacher => "/dashboard",
    }
}

/// Complete sign-in flow. The token must be stored before the profile
/// fetch so that `/qr/me` carries the bearer credential.
#[cfg(feature = "hydrate")]
async fn sign_in(
    api: &ApiClient,
    session: SessionStore,
    auth: RwSignal<AuthState>,
    email: &str,
    password: &str,
) -> Result<&'static str, ApiError> {
    let token = api.login(email, password).await?;
    session.set_token(&token.access_token);
    let profile = api.fetch_me().await?;
    let target = post_login_target(profile.role);
    auth.update(|state| state.login(&session, &token.access_token, profile));
    Ok(target)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = expect_context::<ApiClient>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            error.set("Enter email and password.".to_owned());
            return;
        }
        error.set(String::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match sign_in(&api, session, auth, &email_value, &password_value).await {
                    Ok(target) => crate::util::nav::hard_redirect(target),
                    Err(ApiError::SessionExpired) => {}
                    Err(e) => {
                        error.set(e.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &session, &auth, email_value, password_value);
        }
    };

    view! {
        <div class="center-container">
            <div class="card">
                <div class="app-title">
                    <h1>"CAMPUS360"</h1>
                    <p>"Campus access"</p>
                </div>

                <Show when=move || !error.get().is_empty()>
                    <div class="alert alert--error" role="alert">{move || error.get()}</div>
                </Show>

                <form class="login-form" on:submit=on_submit>
                    <label class="form-group">
                        "Email"
                        <input
                            type="email"
                            placeholder="user@mail.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-group">
                        "Password"
                        <input
                            type="password"
                            placeholder="........"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <p class="card__footer">
                    "No account yet? "
                    <a href="/register">"Create one"</a>
                </p>
            </div>
        </div>
    }
}
