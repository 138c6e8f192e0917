//! Account registration page against `POST /auth/register`.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
#[cfg(feature = "hydrate")]
use crate::net::error::ApiError;

/// Delay before bouncing a freshly registered user back to sign-in.
#[cfg(feature = "hydrate")]
const REDIRECT_DELAY_MS: u64 = 1_500;

#[cfg(any(test, feature = "hydrate"))]
fn registered_message(email: &str) -> String {
    format!("Account created for {email}. Redirecting to sign-in...")
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new("student".to_owned());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let full_name_value = full_name.get().trim().to_owned();
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        let role_value = role.get();
        if full_name_value.is_empty() || email_value.is_empty() || password_value.is_empty() {
            error.set("All fields are required.".to_owned());
            return;
        }
        error.set(String::new());
        success.set(String::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api
                    .register(&full_name_value, &email_value, &password_value, &role_value)
                    .await
                {
                    Ok(created) => {
                        success.set(registered_message(&created.email));
                        gloo_timers::future::sleep(std::time::Duration::from_millis(
                            REDIRECT_DELAY_MS,
                        ))
                        .await;
                        crate::util::nav::hard_redirect("/");
                    }
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
            let _ = (&api, full_name_value, email_value, password_value, role_value);
        }
    };

    view! {
        <div class="center-container">
            <div class="card">
                <div class="app-title">
                    <h1>"CAMPUS360"</h1>
                    <p>"Create account"</p>
                </div>

                <Show when=move || !error.get().is_empty()>
                    <div class="alert alert--error" role="alert">{move || error.get()}</div>
                </Show>
                <Show when=move || !success.get().is_empty()>
                    <div class="alert alert--success" role="status">{move || success.get()}</div>
                </Show>

                <form class="register-form" on:submit=on_submit>
                    <label class="form-group">
                        "Full name"
                        <input
                            type="text"
                            placeholder="Jane Doe"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </label>
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
                            placeholder="At least 6 characters"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-group">
                        "Role"
                        <select
                            prop:value=move || role.get()
                            on:change=move |ev| role.set(event_target_value(&ev))
                        >
                            <option value="student">"Student"</option>
                            <option value="teacher">"Teacher"</option>
                            <option value="admin">"Administrator"</option>
                        </select>
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating..." } else { "Register" }}
                    </button>
                </form>

                <p class="card__footer">
                    <a href="/">"I already have an account"</a>
                </p>
            </div>
        </div>
    }
}
