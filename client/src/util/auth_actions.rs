//! Auth action binder shared by the nav bar and the modals.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every handler goes through these helpers so a transition, its modal
//! closure and its notice land in the same event turn. Nav links re-render
//! from `AuthState` reactively, which keeps the fragment in sync.

#[cfg(test)]
#[path = "auth_actions_test.rs"]
mod auth_actions_test;

use leptos::prelude::*;

use crate::state::auth::{AuthState, LoginForm, SignupForm};
use crate::state::nav::NavAction;
use crate::state::ui::UiState;

/// Run the action bound to a nav entry.
pub fn run_nav_action(action: NavAction, auth: RwSignal<AuthState>, ui: RwSignal<UiState>) {
    match action {
        NavAction::OpenModal(kind) => ui.update(|u| u.open_modal(kind)),
        NavAction::Logout => {
            if let Some(outcome) = auth.try_update(AuthState::logout) {
                ui.update(|u| u.apply(outcome));
            }
        }
    }
}

pub fn submit_login(form: &LoginForm, auth: RwSignal<AuthState>, ui: RwSignal<UiState>) {
    if let Some(outcome) = auth.try_update(|a| a.login(form)) {
        ui.update(|u| u.apply(outcome));
    }
}

/// Returns `true` when the signup went through and the form can be reset.
///
/// The transition runs on a copy so a rejected signup never notifies
/// subscribers of `auth`.
pub fn submit_signup(form: &SignupForm, auth: RwSignal<AuthState>, ui: RwSignal<UiState>) -> bool {
    let mut next = auth.get_untracked();
    match next.signup(form) {
        Ok(outcome) => {
            auth.set(next);
            ui.update(|u| u.apply(outcome));
            true
        }
        Err(err) => {
            ui.update(|u| u.show_notice(err.into()));
            false
        }
    }
}
