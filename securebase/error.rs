//! Error types for securebase

use thiserror::Error;

/// Result type for encoding and decoding operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for encoding and decoding operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input is not valid for the codec's alphabet, or the decoded bytes
    /// are not valid text.
    #[error("invalid data or secret key")]
    InvalidData,

    /// Hashing the secret key failed.
    #[error("hash error: {0}")]
    Hash(#[from] securebase_keccak::Error),
}
