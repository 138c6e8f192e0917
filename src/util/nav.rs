//! Hard navigation helper.
//!
//! Pages and the session-expiry observer force full document navigations
//! (rather than router transitions) so a torn-down session always lands on
//! a freshly loaded entry point. SSR paths safely no-op.

/// Replace the current document location with `path`.
pub fn hard_redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
