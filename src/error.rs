use thiserror::Error;

/// Custom error types for chisha
#[derive(Debug, Error)]
pub enum ChishaError {
    #[error("Invalid config file {path}: {message}")]
    InvalidConfig { path: String, message: String },

    #[error("Reset refused: pass --yes to confirm replacing the whole menu")]
    ResetNotConfirmed,

    #[error("No active dishes. Enable some in the menu first.")]
    NoActiveItems,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
