use super::*;
use crate::state::auth::SignupError;

#[test]
fn notice_messages_match_actions() {
    assert_eq!(Notice::LoggedIn.message(), "Logged in successfully!");
    assert_eq!(Notice::SignedUp.message(), "Signed up and logged in successfully!");
    assert_eq!(Notice::LoggedOut.message(), "Logged out successfully!");
    assert_eq!(Notice::PasswordMismatch.message(), "Passwords do not match!");
}

#[test]
fn mismatch_notice_is_error_tone() {
    assert_eq!(Notice::PasswordMismatch.tone(), Tone::Error);
    assert_eq!(Notice::LoggedIn.tone(), Tone::Success);
    assert_eq!(Notice::LoggedOut.tone(), Tone::Info);
}

#[test]
fn signup_error_converts_to_matching_notice() {
    let notice = Notice::from(SignupError::PasswordMismatch);
    assert_eq!(notice.message(), SignupError::PasswordMismatch.to_string());
}

#[test]
fn tone_class_suffixes_are_distinct() {
    assert_eq!(Tone::default(), Tone::Info);
    assert_ne!(Tone::Success.class_suffix(), Tone::Error.class_suffix());
    assert_ne!(Tone::Info.class_suffix(), Tone::Success.class_suffix());
}
