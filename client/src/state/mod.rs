//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `ui`, `nav`, `notice`) so the session
//! machine and its rendering rules can be tested without a browser.

pub mod auth;
pub mod nav;
pub mod notice;
pub mod ui;
