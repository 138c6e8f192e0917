//! Digital credential card shown on the dashboard.

use leptos::prelude::*;

use crate::net::types::UserProfile;

/// Identity card with the user's details and, once generated, the
/// credential QR image.
#[component]
pub fn CredentialCard(user: UserProfile, qr_url: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <div class="credential-card">
            <h3 class="credential-card__name">{user.full_name}</h3>
            <p class="credential-card__email">{user.email}</p>
            <span class="credential-card__role">{user.role.as_str()}</span>
            {move || {
                qr_url.get().map(|url| {
                    view! { <img class="credential-card__qr" src=url alt="Credential QR code"/> }
                })
            }}
        </div>
    }
}
