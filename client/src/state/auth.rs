//! Page-local auth session state and its transitions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The nav bar and the login/signup modals both read this state from Leptos
//! context. It lives only as long as the mounted app: nothing here touches
//! storage or the network, so a reload always starts logged out.
//!
//! DESIGN
//! ======
//! Transitions are plain methods returning an [`Outcome`] so the component
//! layer can apply the notice and modal closure in the same handler that
//! flipped the flag. That keeps the state machine testable without a DOM.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::notice::Notice;
use crate::state::ui::ModalKind;

/// Authentication state for the current page lifetime.
///
/// Held in an `RwSignal` provided at the app root; there is exactly one
/// writer (the UI thread) so no synchronization is involved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub logged_in: bool,
}

/// Values submitted by the login form. Accepted but not checked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Values submitted by the signup form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Recoverable signup rejection. Display text is shown to the user as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SignupError {
    #[error("Passwords do not match!")]
    PasswordMismatch,
}

/// Side effects a completed transition asks the UI to apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub notice: Notice,
    /// Modal to close after the transition, if any.
    pub close: Option<ModalKind>,
}

impl AuthState {
    /// Login always succeeds; the form contents are ignored.
    pub fn login(&mut self, _form: &LoginForm) -> Outcome {
        self.logged_in = true;
        log::info!("session: logged in");
        Outcome { notice: Notice::LoggedIn, close: Some(ModalKind::Login) }
    }

    /// Sign up and log in when both password fields are identical.
    ///
    /// # Errors
    ///
    /// Returns [`SignupError::PasswordMismatch`] when the fields differ. The
    /// state is left untouched and the signup modal should stay open.
    pub fn signup(&mut self, form: &SignupForm) -> Result<Outcome, SignupError> {
        check_passwords(&form.password, &form.confirm_password)?;
        self.logged_in = true;
        log::info!("session: signed up and logged in");
        Ok(Outcome { notice: Notice::SignedUp, close: Some(ModalKind::Signup) })
    }

    pub fn logout(&mut self) -> Outcome {
        self.logged_in = false;
        log::info!("session: logged out");
        Outcome { notice: Notice::LoggedOut, close: None }
    }
}

/// Exact string comparison; no trimming or normalization.
///
/// # Errors
///
/// Returns [`SignupError::PasswordMismatch`] when the strings differ.
fn check_passwords(password: &str, confirm: &str) -> Result<(), SignupError> {
    if password == confirm {
        Ok(())
    } else {
        log::debug!("session: signup rejected, password mismatch");
        Err(SignupError::PasswordMismatch)
    }
}
