use super::*;

#[test]
fn role_round_trips_through_wire_form() {
    for role in [Role::Student, Role::Teacher, Role::Admin] {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
    assert_eq!(Role::parse("janitor"), None);
}

#[test]
fn user_profile_parses_backend_shape() {
    let raw = r#"{
        "id": "u-1",
        "email": "a@b.com",
        "full_name": "Ada Lovelace",
        "role": "admin",
        "created_at": "2025-09-01T08:00:00"
    }"#;
    let profile: UserProfile = serde_json::from_str(raw).expect("profile parses");
    assert_eq!(profile.role, Role::Admin);
    assert_eq!(profile.full_name, "Ada Lovelace");
    assert_eq!(profile.created_at.as_deref(), Some("2025-09-01T08:00:00"));
}

#[test]
fn user_profile_tolerates_missing_created_at() {
    let raw = r#"{"id":"u-2","email":"s@b.com","full_name":"S","role":"student"}"#;
    let profile: UserProfile = serde_json::from_str(raw).expect("profile parses");
    assert_eq!(profile.created_at, None);
}

#[test]
fn token_response_defaults_token_type_to_bearer() {
    let token: TokenResponse = serde_json::from_str(r#"{"access_token":"abc"}"#).expect("token parses");
    assert_eq!(token.token_type, "bearer");
    assert_eq!(token.access_token, "abc");
}

#[test]
fn history_entry_ignores_extra_backend_columns() {
    let raw = r#"{
        "id": 7,
        "user_id": "u-1",
        "location_id": 3,
        "location_code": "LAB-101",
        "timestamp": "2025-10-02T09:15:00",
        "status": "granted",
        "distance_meters": 12.5
    }"#;
    let entry: AccessHistoryEntry = serde_json::from_str(raw).expect("entry parses");
    assert_eq!(entry.id, 7);
    assert_eq!(entry.location_code, "LAB-101");
}

#[test]
fn scan_outcome_parses_confirmation() {
    let raw = r#"{
        "message": "Access recorded successfully",
        "location_code": "AULA-302",
        "timestamp": "2025-10-02T09:15:00",
        "user": {"id":"u-1","email":"a@b.com","full_name":"A","role":"student"}
    }"#;
    let outcome: ScanOutcome = serde_json::from_str(raw).expect("outcome parses");
    assert_eq!(outcome.location_code, "AULA-302");
}

#[test]
fn user_update_omits_absent_fields() {
    let update = UserUpdate {
        role: Some("teacher".to_owned()),
        ..UserUpdate::default()
    };
    let value = serde_json::to_value(&update).expect("update serializes");
    assert_eq!(value, serde_json::json!({ "role": "teacher" }));
}
