//! Payload types exchanged with the ledger's collaborators.
//!
//! The ledger itself is payload-agnostic; these shapes exist so the
//! compliance gate and the orchestration layer speak a concrete schema.

use serde::{Deserialize, Serialize};

/// One anonymized transaction row, as handed over by the data-preparation
/// collaborator. The wallet address is expected to be masked before this
/// record reaches the ledger boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub transaction_id: String,
    pub wallet_address: String,
    pub amount: f64,
    pub timestamp: String,
    pub country: String,
}

/// Derived analytics summary appended to the ledger under an analyst role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightReport {
    /// Mean amount in the high-value cluster.
    pub high_value_cluster_mean: f64,
    /// Mean amount in the low-value cluster.
    pub low_value_cluster_mean: f64,
    /// Count of transactions above the suspicion threshold.
    pub suspicious_transactions: usize,
}
