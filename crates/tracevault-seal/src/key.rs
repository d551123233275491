//! Session key material for the envelope.
//!
//! The session key stands in for a symmetric key obtained over a trusted
//! out-of-band distribution channel. It is held by the orchestration
//! layer, never persisted, never logged, and never embedded in a block
//! or access-log entry.

use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, SealError};

/// Session key length in bytes.
pub const KEY_LEN: usize = 32;

/// A 256-bit symmetric session key for ChaCha20-Poly1305.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionKey([u8; KEY_LEN]);

impl SessionKey {
    /// Generate a new random key from the thread-local CSPRNG.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let mut bytes = [0u8; KEY_LEN];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Create from a byte slice, rejecting malformed key material.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; KEY_LEN] = bytes
            .try_into()
            .map_err(|_| SealError::Key(format!("expected {KEY_LEN} bytes, got {}", bytes.len())))?;
        Ok(Self(arr))
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

// Key material stays out of logs and debug dumps.
impl fmt::Debug for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionKey(..)")
    }
}

/// A 96-bit nonce for ChaCha20-Poly1305, unique per seal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeNonce(pub [u8; 12]);

impl EnvelopeNonce {
    /// Generate a new random nonce.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let mut bytes = [0u8; 12];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 12] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_produces_distinct_keys() {
        let k1 = SessionKey::generate();
        let k2 = SessionKey::generate();
        assert_ne!(k1.as_bytes(), k2.as_bytes());
    }

    #[test]
    fn test_from_slice_roundtrip() {
        let key = SessionKey::generate();
        let recovered = SessionKey::from_slice(key.as_bytes()).unwrap();
        assert_eq!(key, recovered);
    }

    #[test]
    fn test_from_slice_rejects_wrong_length() {
        let result = SessionKey::from_slice(&[0u8; 16]);
        assert!(matches!(result, Err(SealError::Key(_))));
    }

    #[test]
    fn test_debug_redacts_key_material() {
        let key = SessionKey::from_bytes([0x42; KEY_LEN]);
        let debug = format!("{:?}", key);
        assert_eq!(debug, "SessionKey(..)");
        assert!(!debug.contains("42"));
    }

    #[test]
    fn test_nonce_generation_distinct() {
        let n1 = EnvelopeNonce::generate();
        let n2 = EnvelopeNonce::generate();
        assert_ne!(n1, n2);
    }
}
