//! Dashboard: credential card, location scan, and access history.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. The route guard already vets
//! access, but the page re-checks on mount and hard-redirects with a
//! cleared session when no user is present (a directly loaded URL without
//! a valid session must not soft-render).

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::access_history::AccessHistoryList;
use crate::components::alert::{Alert, AlertSlot};
use crate::components::credential_card::CredentialCard;
use crate::net::api::ApiClient;
use crate::net::types::{AccessHistoryEntry, Role};
use crate::state::auth::AuthState;
use crate::state::session::SessionStore;

#[cfg(feature = "hydrate")]
use crate::components::alert::{AlertKind, show};
#[cfg(feature = "hydrate")]
use crate::net::error::ApiError;

/// How many history rows the dashboard requests.
const HISTORY_LIMIT: u32 = 10;

/// Tabs of the dashboard workspace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Credential,
    Scan,
    History,
}

#[cfg(any(test, feature = "hydrate"))]
fn scan_success_message(location_code: &str) -> String {
    format!("Access registered at {location_code}")
}

#[cfg(any(test, feature = "hydrate"))]
fn scan_error_message(detail: &str) -> String {
    format!("Could not register access: {detail}")
}

#[cfg(any(test, feature = "hydrate"))]
fn credential_error_message(detail: &str) -> String {
    format!("Could not generate the credential: {detail}")
}

/// Fetch the latest history rows. Load failures are logged, not surfaced.
fn load_history(
    api: &ApiClient,
    entries: RwSignal<Vec<AccessHistoryEntry>>,
    loading: RwSignal<bool>,
) {
    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            loading.set(true);
            match api.fetch_history(HISTORY_LIMIT).await {
                Ok(items) => entries.set(items),
                Err(e) => log::error!("history load failed: {e}"),
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, entries, loading);
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = expect_context::<ApiClient>();

    let tab = RwSignal::new(DashboardTab::default());
    let alert = RwSignal::new(AlertSlot::default());
    let history = RwSignal::new(Vec::<AccessHistoryEntry>::new());
    let history_loading = RwSignal::new(false);
    let qr_url = RwSignal::new(None::<String>);
    let generating = RwSignal::new(false);
    let scan_code = RwSignal::new(String::new());

    // On-mount self-check: no user means no dashboard, hard stop.
    Effect::new(move || {
        if auth.get().user.is_none() {
            session.clear();
            crate::util::nav::hard_redirect("/");
        }
    });

    {
        let api = api.clone();
        Effect::new(move || {
            load_history(&api, history, history_loading);
        });
    }

    let on_logout = move |_| {
        auth.update(|state| state.logout(&session));
        crate::util::nav::hard_redirect("/");
    };

    let api_generate = api.clone();
    let on_generate = move |_| {
        if generating.get() {
            return;
        }
        let Some(user) = auth.get_untracked().user else {
            return;
        };
        generating.set(true);

        #[cfg(feature = "hydrate")]
        {
            let api = api_generate.clone();
            leptos::task::spawn_local(async move {
                match api.generate_credential(&user.id).await {
                    Ok(bytes) => match crate::util::download::png_object_url(&bytes) {
                        Some(url) => {
                            qr_url.set(Some(url));
                            show(alert, AlertKind::Success, "Credential generated.");
                        }
                        None => show(alert, AlertKind::Error, "Could not render the credential image."),
                    },
                    Err(ApiError::SessionExpired) => {}
                    Err(e) => show(alert, AlertKind::Error, credential_error_message(&e.to_string())),
                }
                generating.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api_generate, user);
        }
    };

    let api_scan = api.clone();
    let on_scan = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let code = scan_code.get().trim().to_owned();
        if code.is_empty() {
            #[cfg(feature = "hydrate")]
            show(alert, AlertKind::Error, "Enter a location code.");
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let api = api_scan.clone();
            leptos::task::spawn_local(async move {
                match api.scan_location(&code).await {
                    Ok(outcome) => {
                        show(alert, AlertKind::Success, scan_success_message(&outcome.location_code));
                        scan_code.set(String::new());
                        // History must reflect the scan: refresh only after
                        // the scan response resolved.
                        load_history(&api, history, history_loading);
                    }
                    Err(ApiError::SessionExpired) => {}
                    Err(e) => show(alert, AlertKind::Error, scan_error_message(&e.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api_scan, code);
        }
    };

    let header_identity = move || {
        auth.get()
            .user
            .map(|user| (user.full_name, user.email))
            .unwrap_or_default()
    };
    let is_admin = move || {
        auth.get()
            .user
            .map(|user| user.role == Role::Admin)
            .unwrap_or(false)
    };

    view! {
        <div class="dashboard-container">
            <header class="dashboard-header">
                <div>
                    <h2>{move || header_identity().0}</h2>
                    <p class="dashboard-header__email">{move || header_identity().1}</p>
                </div>
                <div class="dashboard-header__actions">
                    <Show when=is_admin>
                        <a class="btn" href="/admin">"Admin panel"</a>
                    </Show>
                    <button class="btn" on:click=on_logout>"Sign out"</button>
                </div>
            </header>

            <Alert slot=alert/>

            <div class="tabs">
                <button
                    class="tab-button"
                    class:active=move || tab.get() == DashboardTab::Credential
                    on:click=move |_| tab.set(DashboardTab::Credential)
                >
                    "Credential"
                </button>
                <button
                    class="tab-button"
                    class:active=move || tab.get() == DashboardTab::Scan
                    on:click=move |_| tab.set(DashboardTab::Scan)
                >
                    "Scan"
                </button>
                <button
                    class="tab-button"
                    class:active=move || tab.get() == DashboardTab::History
                    on:click=move |_| tab.set(DashboardTab::History)
                >
                    "History"
                </button>
            </div>

            <div class="tab-content">
                {move || {
                    let on_generate = on_generate.clone();
                    let on_scan = on_scan.clone();
                    match tab.get() {
                    DashboardTab::Credential => view! {
                        <div class="credential-tab">
                            <Show when=move || qr_url.get().is_none()>
                                <div class="credential-tab__intro">
                                    <div class="dashboard-section-title">"My digital credential"</div>
                                    <p class="dashboard-section-subtitle">
                                        "Generate your campus card with an embedded QR code."
                                    </p>
                                    <button
                                        class="btn btn--primary"
                                        on:click=on_generate.clone()
                                        disabled=move || generating.get()
                                    >
                                        {move || if generating.get() { "Generating..." } else { "Generate credential" }}
                                    </button>
                                </div>
                            </Show>
                            {move || {
                                auth.get().user.map(|user| {
                                    view! { <CredentialCard user=user qr_url=qr_url/> }
                                })
                            }}
                        </div>
                    }
                    .into_any(),
                    DashboardTab::Scan => view! {
                        <div class="scan-tab">
                            <div class="dashboard-section-title">"Register an entry"</div>
                            <p class="dashboard-section-subtitle">
                                "Scan a location QR code or type its code."
                            </p>
                            <form class="scan-form" on:submit=on_scan>
                                <input
                                    type="text"
                                    placeholder="e.g. LAB-101"
                                    prop:value=move || scan_code.get()
                                    on:input=move |ev| {
                                        scan_code.set(event_target_value(&ev).to_ascii_uppercase());
                                    }
                                />
                                <button class="btn btn--primary" type="submit">"Register access"</button>
                            </form>
                        </div>
                    }
                    .into_any(),
                    DashboardTab::History => view! {
                        <AccessHistoryList entries=history loading=history_loading/>
                    }
                    .into_any(),
                }
                }}
            </div>
        </div>
    }
}
