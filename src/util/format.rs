//! Timestamp rendering for access-history rows.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDateTime};

/// Render a backend ISO timestamp as `YYYY-MM-DD HH:MM`.
///
/// The backend emits timestamps both with and without a UTC offset.
/// Strings that parse as neither pass through untouched.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format("%Y-%m-%d %H:%M").to_string();
    }
    raw.to_owned()
}
