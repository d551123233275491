//! # Tracevault
//!
//! An append-only, tamper-evident ledger for anonymized record batches:
//! a hash-chained block sequence, an access-log audit trail on every
//! mutation, and an authenticated-encryption envelope for payloads.
//!
//! ## Overview
//!
//! - **Block**: Immutable. Sealed with a digest at construction; never edited.
//! - **Chain**: Strictly linear and monotonically growing; genesis at index 0.
//! - **Access log**: One `store_data` entry per successful append.
//! - **Sealed envelope**: ChaCha20-Poly1305 over canonical CBOR, keyed by a
//!   session key obtained out-of-band.
//! - **Compliance gate**: the caller-side anonymization check; payloads
//!   reach the ledger only after it passes.
//!
//! ## Usage
//!
//! ```rust
//! use tracevault::{Actor, Ledger, SealedEnvelope, SessionKey};
//!
//! let key = SessionKey::generate();
//! let ledger = Ledger::new();
//!
//! // Seal a payload and commit it.
//! let envelope = SealedEnvelope::seal(&"batch #1", &key).unwrap();
//! let block = ledger
//!     .append(envelope.to_bytes(), Actor::new("node_operator", "system"))
//!     .unwrap();
//!
//! assert!(ledger.is_valid());
//!
//! // Later: retrieve and open.
//! let stored = ledger.get(block.index).unwrap();
//! let reopened = SealedEnvelope::from_bytes(&stored.payload).unwrap();
//! let payload: String = reopened.open(&key).unwrap();
//! assert_eq!(payload, "batch #1");
//! ```
//!
//! ## Re-exports
//!
//! Component crates are re-exported for convenience:
//!
//! - [`core`] - chain primitives (Block, Chain, AccessLog, validation)
//! - [`seal`] - the encryption envelope (SessionKey, SealedEnvelope)

pub mod error;
pub mod gate;
pub mod ledger;
pub mod records;

// Re-export component crates
pub use tracevault_core as core;
pub use tracevault_seal as seal;

// Re-export main types for convenience
pub use error::{LedgerError, Result};
pub use gate::{ComplianceError, ComplianceGate, IdentifierPatternGate};
pub use ledger::{Ledger, LedgerConfig};
pub use records::{InsightReport, TransactionRecord};

// Re-export commonly used component types
pub use tracevault_core::{
    AccessLogEntry, Actor, Block, BlockHash, BlockSummary, ChainFault, ACTION_STORE,
};
pub use tracevault_seal::{SealError, SealedEnvelope, SessionKey};
