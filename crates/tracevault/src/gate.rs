//! Compliance gate: the anonymization check at the ledger boundary.
//!
//! The gate is a collaborator contract, not part of the chain: the
//! orchestration layer must run it before any payload is sealed, and the
//! ledger trusts that it did. Outcomes are explicit `Result`s, never
//! control-flow exceptions.

use thiserror::Error;

use crate::records::TransactionRecord;

/// Rejection raised by the anonymization gate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComplianceError {
    /// A record still carries an unmasked direct identifier.
    #[error("record {index}: field `{field}` contains an unmasked identifier")]
    UnmaskedIdentifier { field: String, index: usize },
}

/// Checks a record batch before it may be sealed and appended.
pub trait ComplianceGate {
    /// Fail fast on the first record that is not fully anonymized.
    fn check(&self, batch: &[TransactionRecord]) -> Result<(), ComplianceError>;
}

/// Reference gate: rejects any wallet address still containing the raw
/// identifier pattern of the upstream data source.
#[derive(Debug, Clone)]
pub struct IdentifierPatternGate {
    pattern: String,
}

impl IdentifierPatternGate {
    /// Gate on a specific raw-identifier pattern.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

impl Default for IdentifierPatternGate {
    /// The upstream source emits `addr<N>` wallet identifiers.
    fn default() -> Self {
        Self::new("addr")
    }
}

impl ComplianceGate for IdentifierPatternGate {
    fn check(&self, batch: &[TransactionRecord]) -> Result<(), ComplianceError> {
        for (index, record) in batch.iter().enumerate() {
            if record.wallet_address.contains(&self.pattern) {
                return Err(ComplianceError::UnmaskedIdentifier {
                    field: "wallet_address".into(),
                    index,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(wallet_address: &str) -> TransactionRecord {
        TransactionRecord {
            transaction_id: "TX0".into(),
            wallet_address: wallet_address.into(),
            amount: 1.0,
            timestamp: "2025-01-14 16:00:00".into(),
            country: "US".into(),
        }
    }

    #[test]
    fn test_masked_batch_passes() {
        let gate = IdentifierPatternGate::default();
        let batch = vec![record("9f86d081884c"), record("60303ae22b99")];
        assert!(gate.check(&batch).is_ok());
    }

    #[test]
    fn test_unmasked_record_fails_fast() {
        let gate = IdentifierPatternGate::default();
        let batch = vec![record("9f86d081884c"), record("addr17"), record("addr18")];

        assert_eq!(
            gate.check(&batch),
            Err(ComplianceError::UnmaskedIdentifier {
                field: "wallet_address".into(),
                index: 1,
            })
        );
    }

    #[test]
    fn test_custom_pattern() {
        let gate = IdentifierPatternGate::new("wallet-");
        let batch = vec![record("wallet-000")];
        assert!(gate.check(&batch).is_err());
    }

    #[test]
    fn test_empty_batch_passes() {
        let gate = IdentifierPatternGate::default();
        assert!(gate.check(&[]).is_ok());
    }
}
