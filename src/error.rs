//! Error types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("character pool is empty, enable at least one character class (-u/-w/-d/-s)")]
    EmptyPool,

    #[error("password length must be between {minimum} and {maximum}, got {length}")]
    InvalidLength {
        length: usize,
        minimum: usize,
        maximum: usize,
    },
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("failed to launch clipboard utility: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("clipboard utility exited with {0}")]
    ExportFailed(std::process::ExitStatus),
}
