use super::*;
use crate::net::types::Role;
use leptos::prelude::Get;

fn profile() -> UserProfile {
    UserProfile {
        id: "u-1".to_owned(),
        email: "a@b.com".to_owned(),
        full_name: "Ada Lovelace".to_owned(),
        role: Role::Student,
        created_at: None,
    }
}

fn client() -> (ApiClient, SessionStore, ArcRwSignal<bool>) {
    let session = SessionStore::new();
    let expired = ArcRwSignal::new(false);
    (ApiClient::new(session, expired.clone()), session, expired)
}

#[test]
fn token_is_attached_when_present_and_not_skipped() {
    assert_eq!(attach_token(Some("tok".to_owned()), false).as_deref(), Some("tok"));
}

#[test]
fn token_is_not_attached_when_skipped() {
    assert_eq!(attach_token(Some("tok".to_owned()), true), None);
    assert_eq!(attach_token(None, false), None);
}

#[test]
fn bearer_value_formats_credential() {
    assert_eq!(bearer_value("tok-1"), "Bearer tok-1");
}

#[test]
fn login_form_body_url_encodes_credentials() {
    assert_eq!(login_form_body("a@b.com", "x"), "username=a%40b.com&password=x");
    assert_eq!(login_form_body("a b", "p&q"), "username=a%20b&password=p%26q");
}

#[test]
fn error_detail_extracts_backend_message() {
    assert_eq!(error_detail(r#"{"detail":"forbidden"}"#), "forbidden");
}

#[test]
fn error_detail_falls_back_on_malformed_body() {
    assert_eq!(error_detail("<html>nope</html>"), GENERIC_DETAIL);
    assert_eq!(error_detail(""), GENERIC_DETAIL);
    assert_eq!(error_detail(r#"{"message":"no detail key"}"#), GENERIC_DETAIL);
}

#[test]
fn unauthorized_failure_tears_down_session_before_returning() {
    let (client, session, expired) = client();
    session.set_token("tok-1");
    session.set_user(&profile());

    let error = client.failure(401, "");

    assert_eq!(error, ApiError::SessionExpired);
    assert_eq!(session.token(), None);
    assert_eq!(session.user(), None);
    assert!(expired.get());
}

#[test]
fn forbidden_failure_surfaces_detail_and_leaves_session_alone() {
    let (client, session, expired) = client();
    session.set_token("tok-1");
    session.set_user(&profile());

    let error = client.failure(403, r#"{"detail":"forbidden"}"#);

    assert_eq!(error.to_string(), "forbidden");
    assert_eq!(session.token().as_deref(), Some("tok-1"));
    assert_eq!(session.user(), Some(profile()));
    assert!(!expired.get());
}

#[test]
fn malformed_error_body_yields_generic_message() {
    let (client, _, _) = client();
    let error = client.failure(500, "not json");
    assert_eq!(error.to_string(), GENERIC_DETAIL);
}

#[test]
fn request_paths_format_as_expected() {
    assert_eq!(history_path(10), "/qr/history?limit=10");
    assert_eq!(credential_path("u-9"), "/admin/qr/generate-credential/u-9");
    assert_eq!(admin_user_path("u-9"), "/admin/users/u-9");
}

#[test]
fn payload_builders_match_wire_shapes() {
    assert_eq!(scan_payload("LAB-101"), serde_json::json!({ "location_code": "LAB-101" }));
    assert_eq!(
        location_qr_payload("LAB-101", "Computer Lab 1"),
        serde_json::json!({ "location_code": "LAB-101", "location_name": "Computer Lab 1" })
    );
    assert_eq!(
        register_payload("Ada", "a@b.com", "secret", "student"),
        serde_json::json!({
            "full_name": "Ada",
            "email": "a@b.com",
            "password": "secret",
            "role": "student",
        })
    );
}

#[test]
fn skip_auth_option_marks_request() {
    let options = RequestOptions::post_form("username=a&password=b".to_owned()).skip_auth();
    assert!(options.skip_auth);
    assert_eq!(options.method, Method::Post);
    assert!(!RequestOptions::get().skip_auth);
}
