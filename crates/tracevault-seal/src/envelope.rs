//! Sealed payload envelope.
//!
//! Before a payload enters the ledger it is wrapped in a SealedEnvelope:
//! canonical CBOR serialization followed by authenticated encryption.
//! Opening verifies the integrity tag before any plaintext is produced.

use chacha20poly1305::{
    aead::{Aead, KeyInit},
    ChaCha20Poly1305, Nonce,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::{Result, SealError};
use crate::key::{EnvelopeNonce, SessionKey};

/// Format identifier for sealed payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum SealFormat {
    /// ChaCha20-Poly1305 with 256-bit key.
    ChaCha20Poly1305 = 1,
}

/// An encrypted payload envelope.
///
/// Wraps the ciphertext and the metadata needed to open it, assuming the
/// caller holds the session key. The key itself is never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SealedEnvelope {
    /// Encryption algorithm used.
    pub format: SealFormat,

    /// Nonce used for this seal (unique per call).
    pub nonce: EnvelopeNonce,

    /// The encrypted data (includes the authentication tag).
    pub ciphertext: Vec<u8>,
}

impl SealedEnvelope {
    /// Serialize a payload to canonical CBOR and encrypt it.
    ///
    /// Sealing is nondeterministic (fresh nonce per call); only the
    /// round trip through [`SealedEnvelope::open`] is required to return
    /// the original value.
    pub fn seal<T: Serialize>(payload: &T, key: &SessionKey) -> Result<Self> {
        let mut plaintext = Vec::new();
        ciborium::into_writer(payload, &mut plaintext)
            .map_err(|e| SealError::Encoding(e.to_string()))?;

        let nonce = EnvelopeNonce::generate();
        let cipher = ChaCha20Poly1305::new_from_slice(key.as_bytes())
            .map_err(|e| SealError::Key(e.to_string()))?;
        let ciphertext = cipher
            .encrypt(Nonce::from_slice(nonce.as_bytes()), plaintext.as_ref())
            .map_err(|e| SealError::Encoding(e.to_string()))?;

        Ok(Self {
            format: SealFormat::ChaCha20Poly1305,
            nonce,
            ciphertext,
        })
    }

    /// Verify the integrity tag and deserialize the payload.
    ///
    /// A wrong key and a tampered ciphertext are indistinguishable here:
    /// both surface as [`SealError::Authentication`], and no partial
    /// plaintext is ever returned.
    pub fn open<T: DeserializeOwned>(&self, key: &SessionKey) -> Result<T> {
        let plaintext = match self.format {
            SealFormat::ChaCha20Poly1305 => {
                let cipher = ChaCha20Poly1305::new_from_slice(key.as_bytes())
                    .map_err(|e| SealError::Key(e.to_string()))?;
                cipher
                    .decrypt(Nonce::from_slice(self.nonce.as_bytes()), self.ciphertext.as_ref())
                    .map_err(|_| SealError::Authentication)?
            }
        };

        ciborium::from_reader(plaintext.as_slice()).map_err(|e| SealError::Encoding(e.to_string()))
    }

    /// Serialize the envelope to CBOR bytes for storage in a block.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        ciborium::into_writer(self, &mut buf).expect("CBOR serialization failed");
        buf
    }

    /// Deserialize an envelope from CBOR bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        ciborium::from_reader(bytes).map_err(|e| SealError::Encoding(e.to_string()))
    }

    /// Get the size of the ciphertext.
    pub fn ciphertext_len(&self) -> usize {
        self.ciphertext.len()
    }
}
