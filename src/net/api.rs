//! Authenticated request gateway for the campus access backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a "not available" error since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every non-success response becomes an `ApiError` and is raised to the
//! calling page; nothing here retries. A 401 additionally clears the
//! session store and sets the shared expiry flag before the call returns —
//! navigation itself is left to the top-level observer in `app`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::prelude::ArcRwSignal;
#[cfg(any(test, feature = "hydrate"))]
use leptos::prelude::Set;

use super::error::ApiError;
use super::types::{AccessHistoryEntry, NewUser, ScanOutcome, TokenResponse, UserProfile, UserUpdate};
use crate::state::session::SessionStore;

#[cfg(any(test, feature = "hydrate"))]
use super::error::GENERIC_DETAIL;

/// HTTP method of a gateway request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Request body. Content type is JSON unless the form override is used.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    Empty,
    Json(serde_json::Value),
    Form(String),
}

/// Per-request options for [`ApiClient::request`].
#[derive(Clone, Debug, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    pub payload: Payload,
    pub skip_auth: bool,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self { method: Method::Get, payload: Payload::Empty, skip_auth: false }
    }

    pub fn delete() -> Self {
        Self { method: Method::Delete, payload: Payload::Empty, skip_auth: false }
    }

    pub fn post_json(value: serde_json::Value) -> Self {
        Self { method: Method::Post, payload: Payload::Json(value), skip_auth: false }
    }

    pub fn put_json(value: serde_json::Value) -> Self {
        Self { method: Method::Put, payload: Payload::Json(value), skip_auth: false }
    }

    pub fn post_form(body: String) -> Self {
        Self { method: Method::Post, payload: Payload::Form(body), skip_auth: false }
    }

    /// Issue the request without attaching the bearer credential.
    pub fn skip_auth(mut self) -> Self {
        self.skip_auth = true;
        self
    }
}

/// Gateway handle: session store plus the shared session-expiry flag.
#[derive(Clone)]
pub struct ApiClient {
    session: SessionStore,
    expired: ArcRwSignal<bool>,
}

impl ApiClient {
    pub fn new(session: SessionStore, expired: ArcRwSignal<bool>) -> Self {
        Self { session, expired }
    }

    /// Turn a non-success response into the raised error. For a 401 the
    /// session is cleared and the expiry flag set before returning.
    #[cfg(any(test, feature = "hydrate"))]
    fn failure(&self, status: u16, body: &str) -> ApiError {
        if status == 401 {
            self.session.clear();
            self.expired.set(true);
            return ApiError::SessionExpired;
        }
        ApiError::Api { status, detail: error_detail(body) }
    }

    /// Issue a request against the backend origin. Returns the raw response
    /// unconsumed; callers decide whether to parse JSON or binary payloads.
    #[cfg(feature = "hydrate")]
    pub async fn request(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<gloo_net::http::Response, ApiError> {
        use gloo_net::http::Request;

        let url = super::config::endpoint(path);
        let builder = match options.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        let builder = match attach_token(self.session.token(), options.skip_auth) {
            Some(token) => builder.header("Authorization", &bearer_value(&token)),
            None => builder,
        };
        let request = match options.payload {
            Payload::Empty => builder.header("Content-Type", "application/json").build(),
            Payload::Json(value) => builder.json(&value),
            Payload::Form(body) => builder
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(body),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if response.ok() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(self.failure(response.status(), &body))
    }

    /// `POST /auth/login` with form-encoded credentials. No token attached.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let options = RequestOptions::post_form(login_form_body(username, password)).skip_auth();
            let response = self.request("/auth/login", options).await?;
            response.json().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username, password);
            Err(ApiError::unavailable())
        }
    }

    /// `POST /auth/register`. No token attached.
    pub async fn register(
        &self,
        full_name: &str,
        email: &str,
        password: &str,
        role: &str,
    ) -> Result<UserProfile, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let options =
                RequestOptions::post_json(register_payload(full_name, email, password, role)).skip_auth();
            let response = self.request("/auth/register", options).await?;
            response.json().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (full_name, email, password, role);
            Err(ApiError::unavailable())
        }
    }

    /// `GET /qr/me` — profile of the authenticated user.
    pub async fn fetch_me(&self) -> Result<UserProfile, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let response = self.request("/qr/me", RequestOptions::get()).await?;
            response.json().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::unavailable())
        }
    }

    /// `POST /qr/scan` — register an entry at a location.
    pub async fn scan_location(&self, location_code: &str) -> Result<ScanOutcome, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let options = RequestOptions::post_json(scan_payload(location_code));
            let response = self.request("/qr/scan", options).await?;
            response.json().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = location_code;
            Err(ApiError::unavailable())
        }
    }

    /// `GET /qr/history?limit=N` — most recent entries first.
    pub async fn fetch_history(&self, limit: u32) -> Result<Vec<AccessHistoryEntry>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let response = self.request(&history_path(limit), RequestOptions::get()).await?;
            response.json().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = limit;
            Err(ApiError::unavailable())
        }
    }

    /// `GET /admin/qr/generate-credential/{user_id}` — credential QR as PNG bytes.
    pub async fn generate_credential(&self, user_id: &str) -> Result<Vec<u8>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let response = self.request(&credential_path(user_id), RequestOptions::get()).await?;
            response.binary().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user_id;
            Err(ApiError::unavailable())
        }
    }

    /// `POST /admin/qr/generate-location` — location QR as PNG bytes.
    pub async fn generate_location_qr(&self, code: &str, name: &str) -> Result<Vec<u8>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let options = RequestOptions::post_json(location_qr_payload(code, name));
            let response = self.request("/admin/qr/generate-location", options).await?;
            response.binary().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (code, name);
            Err(ApiError::unavailable())
        }
    }

    /// `GET /admin/users`.
    pub async fn list_users(&self) -> Result<Vec<UserProfile>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let response = self.request("/admin/users", RequestOptions::get()).await?;
            response.json().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::unavailable())
        }
    }

    /// `POST /admin/users`.
    pub async fn create_user(&self, user: &NewUser) -> Result<UserProfile, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let value = serde_json::to_value(user).map_err(|e| ApiError::Decode(e.to_string()))?;
            let response = self.request("/admin/users", RequestOptions::post_json(value)).await?;
            response.json().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user;
            Err(ApiError::unavailable())
        }
    }

    /// `PUT /admin/users/{id}`.
    pub async fn update_user(&self, user_id: &str, update: &UserUpdate) -> Result<UserProfile, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let value = serde_json::to_value(update).map_err(|e| ApiError::Decode(e.to_string()))?;
            let response = self
                .request(&admin_user_path(user_id), RequestOptions::put_json(value))
                .await?;
            response.json().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, update);
            Err(ApiError::unavailable())
        }
    }

    /// `DELETE /admin/users/{id}`.
    pub async fn delete_user(&self, user_id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.request(&admin_user_path(user_id), RequestOptions::delete()).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user_id;
            Err(ApiError::unavailable())
        }
    }
}

/// The credential to attach, if any: the stored token unless skipped.
#[cfg(any(test, feature = "hydrate"))]
fn attach_token(token: Option<String>, skip_auth: bool) -> Option<String> {
    if skip_auth { None } else { token }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Extract the backend `detail` message from an error body, falling back
/// to the generic detail when the body is not the expected JSON shape.
#[cfg(any(test, feature = "hydrate"))]
fn error_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("detail").and_then(|d| d.as_str()).map(str::to_owned))
        .unwrap_or_else(|| GENERIC_DETAIL.to_owned())
}

#[cfg(any(test, feature = "hydrate"))]
fn login_form_body(username: &str, password: &str) -> String {
    format!(
        "username={}&password={}",
        urlencoding::encode(username),
        urlencoding::encode(password)
    )
}

#[cfg(any(test, feature = "hydrate"))]
fn register_payload(full_name: &str, email: &str, password: &str, role: &str) -> serde_json::Value {
    serde_json::json!({
        "full_name": full_name,
        "email": email,
        "password": password,
        "role": role,
    })
}

#[cfg(any(test, feature = "hydrate"))]
fn scan_payload(location_code: &str) -> serde_json::Value {
    serde_json::json!({ "location_code": location_code })
}

#[cfg(any(test, feature = "hydrate"))]
fn location_qr_payload(location_code: &str, location_name: &str) -> serde_json::Value {
    serde_json::json!({
        "location_code": location_code,
        "location_name": location_name,
    })
}

#[cfg(any(test, feature = "hydrate"))]
fn history_path(limit: u32) -> String {
    format!("/qr/history?limit={limit}")
}

#[cfg(any(test, feature = "hydrate"))]
fn credential_path(user_id: &str) -> String {
    format!("/admin/qr/generate-credential/{user_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn admin_user_path(user_id: &str) -> String {
    format!("/admin/users/{user_id}")
}
