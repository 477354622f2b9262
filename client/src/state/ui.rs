//! Local UI chrome state (modal visibility, current notice).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of `auth` so the session
//! machine never depends on which dialog happens to be open. Nothing here
//! reads or writes the logged-in flag.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::state::auth::Outcome;
use crate::state::notice::Notice;

/// The two auth dialogs on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    Login,
    Signup,
}

impl ModalKind {
    /// Stable DOM id of the modal backdrop container.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Login => "loginModal",
            Self::Signup => "signupModal",
        }
    }

    /// Stable DOM id of the modal's close control.
    pub fn close_id(self) -> &'static str {
        match self {
            Self::Login => "closeLogin",
            Self::Signup => "closeSignup",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Signup => "Sign Up",
        }
    }
}

/// UI state for modals and the notice toast.
///
/// Provided as an `RwSignal` from the app root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub login_open: bool,
    pub signup_open: bool,
    pub notice: Option<Notice>,
    /// Bumped on every notice so repeated identical notices still re-show.
    pub notice_seq: u64,
}

impl UiState {
    pub fn is_open(&self, kind: ModalKind) -> bool {
        match kind {
            ModalKind::Login => self.login_open,
            ModalKind::Signup => self.signup_open,
        }
    }

    pub fn open_modal(&mut self, kind: ModalKind) {
        *self.flag_mut(kind) = true;
    }

    pub fn close_modal(&mut self, kind: ModalKind) {
        *self.flag_mut(kind) = false;
    }

    /// Handle a click inside a modal container.
    ///
    /// Only a click whose target is the backdrop itself closes the modal;
    /// clicks that land on inner content are ignored. Returns whether the
    /// modal was closed.
    pub fn backdrop_click(&mut self, kind: ModalKind, target_is_backdrop: bool) -> bool {
        if target_is_backdrop && self.is_open(kind) {
            self.close_modal(kind);
            return true;
        }
        false
    }

    pub fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.notice_seq += 1;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Apply the UI half of an auth transition.
    pub fn apply(&mut self, outcome: Outcome) {
        if let Some(kind) = outcome.close {
            self.close_modal(kind);
        }
        self.show_notice(outcome.notice);
    }

    fn flag_mut(&mut self, kind: ModalKind) -> &mut bool {
        match kind {
            ModalKind::Login => &mut self.login_open,
            ModalKind::Signup => &mut self.signup_open,
        }
    }
}
