//! Error types for the seal crate.

use thiserror::Error;

/// Errors that can occur while sealing or opening an envelope.
///
/// None of these are retried automatically: a malformed key is a caller
/// bug or a compromised credential, and a failed tag check must never be
/// downgraded to partial plaintext.
#[derive(Debug, Error)]
pub enum SealError {
    /// Payload cannot be serialized or deserialized canonically.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Key material is malformed (wrong length or format).
    #[error("key error: {0}")]
    Key(String),

    /// Ciphertext integrity verification failed (wrong key or tampering).
    #[error("authentication failed: ciphertext does not verify under this key")]
    Authentication,
}

/// Result type for seal operations.
pub type Result<T> = std::result::Result<T, SealError>;
