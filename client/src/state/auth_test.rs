use super::*;

fn signup_form(password: &str, confirm: &str) -> SignupForm {
    SignupForm {
        email: "user@example.com".to_owned(),
        password: password.to_owned(),
        confirm_password: confirm.to_owned(),
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_logged_out() {
    let state = AuthState::default();
    assert!(!state.logged_in);
}

// =============================================================
// login
// =============================================================

#[test]
fn login_with_empty_form_logs_in() {
    let mut state = AuthState::default();
    let outcome = state.login(&LoginForm::default());
    assert!(state.logged_in);
    assert_eq!(outcome.notice, Notice::LoggedIn);
    assert_eq!(outcome.close, Some(ModalKind::Login));
}

#[test]
fn login_ignores_field_values() {
    let mut state = AuthState::default();
    let form = LoginForm { email: "not-an-email".to_owned(), password: String::new() };
    state.login(&form);
    assert!(state.logged_in);
}

// =============================================================
// signup
// =============================================================

#[test]
fn signup_mismatch_keeps_state_and_modal() {
    let mut state = AuthState::default();
    let err = state.signup(&signup_form("abc", "xyz")).unwrap_err();
    assert_eq!(err, SignupError::PasswordMismatch);
    assert_eq!(err.to_string(), "Passwords do not match!");
    assert!(!state.logged_in);
}

#[test]
fn signup_match_logs_in_and_closes_signup() {
    let mut state = AuthState::default();
    let outcome = state.signup(&signup_form("abc", "abc")).unwrap();
    assert!(state.logged_in);
    assert_eq!(outcome.notice, Notice::SignedUp);
    assert_eq!(outcome.close, Some(ModalKind::Signup));
}

#[test]
fn check_passwords_does_not_trim() {
    assert_eq!(check_passwords("abc", "abc "), Err(SignupError::PasswordMismatch));
    assert_eq!(check_passwords("", ""), Ok(()));
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_from_logged_in_returns_to_logged_out() {
    let mut state = AuthState { logged_in: true };
    let outcome = state.logout();
    assert!(!state.logged_in);
    assert_eq!(outcome.notice, Notice::LoggedOut);
    assert_eq!(outcome.close, None);
}

#[test]
fn login_logout_cycle_repeats() {
    let mut state = AuthState::default();
    for _ in 0..3 {
        state.login(&LoginForm::default());
        assert!(state.logged_in);
        state.logout();
        assert!(!state.logged_in);
    }
}
