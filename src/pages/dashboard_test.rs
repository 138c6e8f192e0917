use super::*;

#[test]
fn credential_tab_is_the_default() {
    assert_eq!(DashboardTab::default(), DashboardTab::Credential);
}

#[test]
fn history_request_is_capped_at_ten_rows() {
    assert_eq!(HISTORY_LIMIT, 10);
}

#[test]
fn scan_messages_name_the_location_or_failure() {
    assert_eq!(scan_success_message("LAB-101"), "Access registered at LAB-101");
    assert_eq!(
        scan_error_message("location not found"),
        "Could not register access: location not found"
    );
}

#[test]
fn credential_error_message_carries_the_detail() {
    assert_eq!(
        credential_error_message("unknown error"),
        "Could not generate the credential: unknown error"
    );
}
