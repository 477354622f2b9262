//! Helpers shared by pages and components.

pub mod auth_actions;
pub mod upload_gate;
