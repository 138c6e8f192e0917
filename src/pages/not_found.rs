//! Catch-all view for unknown routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="center-container">
            <div class="card">
                <h1>"Page not found"</h1>
                <a class="btn" href="/">"Back to sign-in"</a>
            </div>
        </div>
    }
}
