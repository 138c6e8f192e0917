//! Wire DTOs for the campus access backend.
//!
//! DESIGN
//! ======
//! These types mirror the backend response schemas. Unknown fields are
//! ignored on deserialization so additive backend changes do not break the
//! client; profiles are immutable snapshots replaced wholesale on login.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Account role controlling page access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl Role {
    /// Wire/display form of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
            Self::Admin => "admin",
        }
    }

    /// Parse a form-select value back into a role.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "student" => Some(Self::Student),
            "teacher" => Some(Self::Teacher),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user account as returned by `/qr/me` and the admin user endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique user identifier.
    pub id: String,
    /// Login email address.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// Account role.
    pub role: Role,
    /// Account creation timestamp, if the backend includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Response of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Bearer credential attached to subsequent requests.
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

/// One access-log row from `GET /qr/history`.
///
/// The backend attaches more columns (user id, geolocation, status); only
/// the fields the client renders are modeled here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccessHistoryEntry {
    pub id: i64,
    pub location_code: String,
    /// ISO timestamp, rendered via `util::format::format_timestamp`.
    pub timestamp: String,
}

/// Confirmation payload of `POST /qr/scan`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScanOutcome {
    pub message: String,
    pub location_code: String,
    pub timestamp: String,
}

/// Body of `POST /admin/users`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: String,
}

/// Body of `PUT /admin/users/{id}`; absent fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}
