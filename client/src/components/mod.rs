//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and forms while reading/writing shared
//! state from Leptos context providers.

pub mod auth_modal;
pub mod nav_bar;
pub mod notice_toast;
pub mod upload_form;
