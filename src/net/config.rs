//! Backend origin configuration.
//!
//! The base URL is baked in at build time via the `CAMPUS360_API_URL`
//! environment variable; local development falls back to the default
//! origin below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Fallback origin used when no build-time override is present.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// The backend origin every gateway request is issued against.
pub fn base_url() -> &'static str {
    option_env!("CAMPUS360_API_URL").unwrap_or(DEFAULT_BASE_URL)
}

/// Absolute URL for a backend path (`path` starts with `/`).
pub fn endpoint(path: &str) -> String {
    format!("{}{path}", base_url())
}
