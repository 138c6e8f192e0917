use super::*;

#[test]
fn users_tab_is_the_default() {
    assert_eq!(AdminTab::default(), AdminTab::Users);
}

#[test]
fn download_name_is_the_location_code() {
    assert_eq!(location_qr_file_name("LAB-101"), "LAB-101.png");
}

#[test]
fn qr_error_message_carries_the_detail() {
    assert_eq!(
        location_qr_error_message("forbidden"),
        "Could not generate the QR: forbidden"
    );
}
