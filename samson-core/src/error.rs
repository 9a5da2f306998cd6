//! Error types for the Samson core library.

use thiserror::Error;

/// Top-level error type for all Samson operations.
#[derive(Error, Debug)]
pub enum SamsonError {
    /// A position outside the current sequence was requested.
    #[error("Position out of range: {position} (sequence length: {len})")]
    OutOfRange {
        /// The requested position.
        position: usize,
        /// Length of the sequence at the time of the request.
        len: usize,
    },

    /// The sequence holds no tokens at all.
    #[error("Sequence memory is empty")]
    EmptyMemory,

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, SamsonError>;
