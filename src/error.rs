//! Error types for compression operations.

use thiserror::Error;

/// Error variants for compression operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The input byte sequence was empty; there is nothing to code.
    #[error("empty input")]
    EmptyInput,

    /// An I/O error surfaced by a codec backend.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for compression operations.
pub type Result<T> = std::result::Result<T, Error>;
