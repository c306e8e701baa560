//! Error types for securebase-keccak

use thiserror::Error;

/// Result type for hashing operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for hashing operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The session was disposed and can no longer be used.
    #[error("object is disposed")]
    ObjectDisposed,

    /// The requested digest size is zero, not a whole number of bytes, or
    /// leaves no room for a positive rate.
    #[error("invalid output length: {0} bits")]
    InvalidOutputLength(usize),
}
