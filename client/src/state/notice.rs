//! User-facing notifications raised by auth and upload actions.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// Visual tone of a notice or inline message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Info,
    Success,
    Error,
}

impl Tone {
    /// BEM modifier appended to the notice/message class.
    pub fn class_suffix(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A single toast shown after an auth action completes or is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    LoggedIn,
    SignedUp,
    LoggedOut,
    PasswordMismatch,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Self::LoggedIn => "Logged in successfully!",
            Self::SignedUp => "Signed up and logged in successfully!",
            Self::LoggedOut => "Logged out successfully!",
            Self::PasswordMismatch => "Passwords do not match!",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Self::LoggedIn | Self::SignedUp => Tone::Success,
            Self::LoggedOut => Tone::Info,
            Self::PasswordMismatch => Tone::Error,
        }
    }
}

impl From<crate::state::auth::SignupError> for Notice {
    fn from(err: crate::state::auth::SignupError) -> Self {
        match err {
            crate::state::auth::SignupError::PasswordMismatch => Self::PasswordMismatch,
        }
    }
}
