//! Startup errors for the host binary.

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid {var} value: {value:?}")]
    InvalidEnv { var: &'static str, value: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
