//! Fallback view for non-admins reaching an admin-only route.

use leptos::prelude::*;

#[component]
pub fn NotAuthorizedPage() -> impl IntoView {
    view! {
        <div class="center-container">
            <div class="card">
                <h1>"Not authorized"</h1>
                <p>"This area requires an administrator account."</p>
                <a class="btn" href="/dashboard">"Back to my dashboard"</a>
            </div>
        </div>
    }
}
