use super::*;

#[test]
fn endpoint_concatenates_base_and_path() {
    assert_eq!(endpoint("/qr/me"), format!("{}/qr/me", base_url()));
}

#[test]
fn base_url_defaults_to_local_development_origin() {
    if option_env!("CAMPUS360_API_URL").is_none() {
        assert_eq!(base_url(), DEFAULT_BASE_URL);
    }
}
