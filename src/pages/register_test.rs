use super::*;

#[test]
fn registered_message_names_the_new_account() {
    assert_eq!(
        registered_message("a@b.com"),
        "Account created for a@b.com. Redirecting to sign-in..."
    );
}
