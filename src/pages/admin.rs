//! Admin panel: user management and location QR generation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Admin-only route. Like the dashboard, the page re-checks its
//! capability on mount and hard-redirects with a cleared session when the
//! current user is missing or not an admin.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::components::alert::{Alert, AlertSlot};
use crate::components::guards::permits_admin;
use crate::components::user_management::UserManagement;
use crate::net::api::ApiClient;
use crate::state::auth::AuthState;
use crate::state::session::SessionStore;

#[cfg(feature = "hydrate")]
use crate::components::alert::{AlertKind, show};
#[cfg(feature = "hydrate")]
use crate::net::error::ApiError;

/// Tabs of the admin workspace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Users,
    Qr,
}

/// Download name for a generated location QR image.
#[cfg(any(test, feature = "hydrate"))]
fn location_qr_file_name(location_code: &str) -> String {
    format!("{location_code}.png")
}

#[cfg(any(test, feature = "hydrate"))]
fn location_qr_error_message(detail: &str) -> String {
    format!("Could not generate the QR: {detail}")
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = expect_context::<ApiClient>();

    let tab = RwSignal::new(AdminTab::default());
    let alert = RwSignal::new(AlertSlot::default());

    let location_code = RwSignal::new(String::new());
    let location_name = RwSignal::new(String::new());
    let qr_url = RwSignal::new(None::<String>);
    let generating = RwSignal::new(false);

    // On-mount self-check: only admins may stay on this route.
    Effect::new(move || {
        if !permits_admin(auth.get().user.as_ref()) {
            session.clear();
            crate::util::nav::hard_redirect("/");
        }
    });

    let on_logout = move |_| {
        auth.update(|state| state.logout(&session));
        crate::util::nav::hard_redirect("/");
    };

    let api_generate = api.clone();
    let on_generate = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if generating.get() {
            return;
        }
        let code = location_code.get().trim().to_owned();
        let name = location_name.get().trim().to_owned();
        if code.is_empty() {
            #[cfg(feature = "hydrate")]
            show(alert, AlertKind::Error, "Location code is required.");
            return;
        }
        generating.set(true);

        #[cfg(feature = "hydrate")]
        {
            let api = api_generate.clone();
            leptos::task::spawn_local(async move {
                match api.generate_location_qr(&code, &name).await {
                    Ok(bytes) => match crate::util::download::png_object_url(&bytes) {
                        Some(url) => {
                            qr_url.set(Some(url));
                            show(alert, AlertKind::Success, "Location QR generated.");
                        }
                        None => show(alert, AlertKind::Error, "Could not render the QR image."),
                    },
                    Err(ApiError::SessionExpired) => {}
                    Err(e) => show(alert, AlertKind::Error, location_qr_error_message(&e.to_string())),
                }
                generating.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api_generate, code, name);
        }
    };

    let on_download = move |_| {
        let code = location_code.get_untracked().trim().to_owned();
        let Some(url) = qr_url.get_untracked() else {
            return;
        };
        if code.is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        crate::util::download::trigger_download(&url, &location_qr_file_name(&code));
        #[cfg(not(feature = "hydrate"))]
        let _ = url;
    };

    view! {
        <div class="dashboard-container">
            <header class="dashboard-header">
                <div>
                    <h2>"Admin panel"</h2>
                    <p class="dashboard-header__email">"CAMPUS360 system management"</p>
                </div>
                <div class="dashboard-header__actions">
                    <a class="btn" href="/dashboard">"My dashboard"</a>
                    <button class="btn" on:click=on_logout>"Sign out"</button>
                </div>
            </header>

            <Alert slot=alert/>

            <div class="tabs">
                <button
                    class="tab-button"
                    class:active=move || tab.get() == AdminTab::Users
                    on:click=move |_| tab.set(AdminTab::Users)
                >
                    "Users"
                </button>
                <button
                    class="tab-button"
                    class:active=move || tab.get() == AdminTab::Qr
                    on:click=move |_| tab.set(AdminTab::Qr)
                >
                    "Location QR"
                </button>
            </div>

            <div class="tab-content">
                <Show when=move || tab.get() == AdminTab::Users>
                    <UserManagement alert=alert/>
                </Show>
                <Show when=move || tab.get() == AdminTab::Qr>
                    <div class="admin-card">
                        <h3>"Generate a location QR"</h3>
                        <p class="dashboard-section-subtitle">
                            "Create printable QR codes for labs, classrooms and other campus spots."
                        </p>
                        <form class="qr-form" on:submit=on_generate.clone()>
                            <label class="form-group">
                                "Location code *"
                                <input
                                    type="text"
                                    placeholder="e.g. LAB-101, AULA-302"
                                    prop:value=move || location_code.get()
                                    on:input=move |ev| location_code.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="form-group">
                                "Location name (optional)"
                                <input
                                    type="text"
                                    placeholder="Computer Lab 1"
                                    prop:value=move || location_name.get()
                                    on:input=move |ev| location_name.set(event_target_value(&ev))
                                />
                            </label>
                            <button class="btn btn--primary" type="submit" disabled=move || generating.get()>
                                {move || if generating.get() { "Generating..." } else { "Generate QR" }}
                            </button>
                        </form>
                        <Show when=move || qr_url.get().is_some()>
                            <div class="qr-preview">
                                <img
                                    class="qr-preview__image"
                                    src=move || qr_url.get().unwrap_or_default()
                                    alt="Location QR code"
                                />
                                <button class="btn" on:click=on_download.clone()>
                                    "Download PNG"
                                </button>
                            </div>
                        </Show>
                    </div>
                </Show>
            </div>
        </div>
    }
}
