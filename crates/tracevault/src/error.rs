//! Error types for the unified ledger API.

use thiserror::Error;

use crate::gate::ComplianceError;
use tracevault_seal::SealError;

/// Errors that can occur during ledger operations.
///
/// All errors are local: no retry, no silent recovery. A failed append
/// leaves the chain and access log exactly as they were.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Envelope error (encoding, key material, or authentication).
    #[error("seal error: {0}")]
    Seal(#[from] SealError),

    /// Compliance gate rejection, propagated unchanged.
    #[error("compliance error: {0}")]
    Compliance(#[from] ComplianceError),

    /// Payload exceeds the configured size cap.
    #[error("payload of {len} bytes exceeds configured cap of {max}")]
    PayloadTooLarge { len: usize, max: usize },
}

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
