use super::*;

#[test]
fn formats_rfc3339_timestamps() {
    assert_eq!(format_timestamp("2025-10-02T09:15:00Z"), "2025-10-02 09:15");
    assert_eq!(format_timestamp("2025-10-02T09:15:00+00:00"), "2025-10-02 09:15");
}

#[test]
fn formats_naive_timestamps_with_and_without_fraction() {
    assert_eq!(format_timestamp("2025-10-02T09:15:00"), "2025-10-02 09:15");
    assert_eq!(format_timestamp("2025-10-02T09:15:00.123456"), "2025-10-02 09:15");
}

#[test]
fn passes_unparseable_strings_through() {
    assert_eq!(format_timestamp("yesterday"), "yesterday");
    assert_eq!(format_timestamp(""), "");
}
