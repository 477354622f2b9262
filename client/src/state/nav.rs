//! Auth navigation entries derived from session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `NavBar` renders every auth entry from [`auth_links`] and tags it with the
//! `data-auth` marker. The whole marked set is rebuilt from the descriptor
//! list on each change, so the displayed links are always a function of the
//! current `AuthState` and never carry stale entries or handlers.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::state::auth::AuthState;
use crate::state::ui::ModalKind;

/// What activating a nav entry does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    OpenModal(ModalKind),
    Logout,
}

/// Descriptor for one auth-related navigation item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub action: NavAction,
}

const LOGGED_IN_LINKS: &[NavEntry] = &[NavEntry { label: "Logout", action: NavAction::Logout }];

const LOGGED_OUT_LINKS: &[NavEntry] = &[
    NavEntry { label: "Login", action: NavAction::OpenModal(ModalKind::Login) },
    NavEntry { label: "Sign Up", action: NavAction::OpenModal(ModalKind::Signup) },
];

/// Auth entries for the nav list, in display order.
pub fn auth_links(state: &AuthState) -> Vec<NavEntry> {
    if state.logged_in { LOGGED_IN_LINKS.to_vec() } else { LOGGED_OUT_LINKS.to_vec() }
}
