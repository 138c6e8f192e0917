//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The App constructs the session store, the request gateway and the auth
//! state exactly once, provides them via context, and installs the single
//! observer that turns gateway-reported session expiry into a hard
//! navigation back to the sign-in entry point.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guards::{RequireAdmin, RequireUser};
use crate::net::api::ApiClient;
use crate::pages::{
    admin::AdminPage, dashboard::DashboardPage, login::LoginPage, not_authorized::NotAuthorizedPage,
    not_found::NotFoundPage, register::RegisterPage,
};
use crate::state::auth::AuthState;
use crate::state::session::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store, gateway, and auth state contexts and sets
/// up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::new();
    let expired = ArcRwSignal::new(false);
    let api = ApiClient::new(session, expired.clone());
    let auth = RwSignal::new(AuthState::from_session(&session));

    provide_context(session);
    provide_context(api);
    provide_context(auth);

    // The gateway tears sessions down but never navigates; this is the one
    // place that reacts to expiry.
    Effect::new(move || {
        if expired.get() {
            crate::util::nav::hard_redirect("/");
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/campus360.css"/>
        <Title text="CAMPUS360"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <RequireUser><DashboardPage/></RequireUser> }
                />
                <Route
                    path=StaticSegment("admin")
                    view=|| view! { <RequireAdmin><AdminPage/></RequireAdmin> }
                />
                <Route path=StaticSegment("no-access") view=NotAuthorizedPage/>
            </Routes>
        </Router>
    }
}
