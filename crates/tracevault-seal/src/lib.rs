//! # Tracevault Seal
//!
//! The encryption envelope that wraps payloads before they enter the
//! ledger: canonical CBOR serialization plus ChaCha20-Poly1305
//! authenticated encryption under a caller-supplied session key.
//!
//! The session key stands in for key material distributed over a trusted
//! out-of-band channel; this crate never stores it.

pub mod envelope;
pub mod error;
pub mod key;

pub use envelope::{SealFormat, SealedEnvelope};
pub use error::{Result, SealError};
pub use key::{EnvelopeNonce, SessionKey, KEY_LEN};
