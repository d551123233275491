//! The Ledger: the hash chain and its access log behind one lock.
//!
//! A Ledger is explicitly constructed and passed by reference; there is
//! no process-wide instance. Appends are mutually exclusive, and readers
//! observe a consistent snapshot: a block is either fully present or not
//! yet there, never partial.

use std::sync::RwLock;

use bytes::Bytes;
use tracing::debug;

use tracevault_core::{
    audit_chain, AccessLog, AccessLogEntry, Actor, Block, BlockHash, BlockSummary, Chain,
    ChainFault, ACTION_STORE,
};

use crate::error::{LedgerError, Result};

/// Configuration for a ledger instance.
#[derive(Debug, Clone, Default)]
pub struct LedgerConfig {
    /// Optional payload size cap in bytes. `None` (the default) stores
    /// payloads of any size, whole, without chunking.
    pub max_payload_bytes: Option<usize>,
}

struct LedgerInner {
    chain: Chain,
    access_log: AccessLog,
}

/// An append-only, tamper-evident ledger with an access-log audit trail.
pub struct Ledger {
    inner: RwLock<LedgerInner>,
    config: LedgerConfig,
    started_at_ms: i64,
}

impl Ledger {
    /// Create a ledger with default configuration.
    ///
    /// The genesis block is created synchronously; the access log starts
    /// empty (genesis has no prior actor and is not logged).
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::default())
    }

    /// Create a ledger with the given configuration.
    pub fn with_config(config: LedgerConfig) -> Self {
        let started_at_ms = now_millis();
        Self {
            inner: RwLock::new(LedgerInner {
                chain: Chain::new(started_at_ms),
                access_log: AccessLog::new(),
            }),
            config,
            started_at_ms,
        }
    }

    /// Append a payload as a new block and record the access entry.
    ///
    /// Block first, log second, under one write lock: the two writes form
    /// one logical unit, and a rejected payload leaves both untouched.
    /// Returns the sealed block.
    pub fn append(&self, payload: impl Into<Bytes>, actor: Actor) -> Result<Block> {
        let payload = payload.into();

        if let Some(max) = self.config.max_payload_bytes {
            if payload.len() > max {
                return Err(LedgerError::PayloadTooLarge {
                    len: payload.len(),
                    max,
                });
            }
        }

        let mut inner = self.inner.write().unwrap();

        let block = inner.chain.append(payload, actor.clone(), now_millis()).clone();
        inner
            .access_log
            .record(&actor, ACTION_STORE, now_millis());

        debug!(
            index = block.index,
            user = %actor.user,
            role = %actor.role,
            "block appended"
        );

        Ok(block)
    }

    /// Whether the chain passes every integrity check.
    ///
    /// Side-effect free; safe to call at any time, including concurrently
    /// with reads.
    pub fn is_valid(&self) -> bool {
        self.audit().is_ok()
    }

    /// Audit the chain, returning the first fault found.
    pub fn audit(&self) -> std::result::Result<(), ChainFault> {
        let inner = self.inner.read().unwrap();
        audit_chain(inner.chain.blocks())
    }

    /// Summaries of every block, in index order.
    pub fn get_all(&self) -> Vec<BlockSummary> {
        let inner = self.inner.read().unwrap();
        inner.chain.blocks().iter().map(Block::summary).collect()
    }

    /// The block at the given index, if present.
    pub fn get(&self, index: u64) -> Option<Block> {
        let inner = self.inner.read().unwrap();
        inner.chain.get(index).cloned()
    }

    /// Access-log entries in insertion order.
    pub fn access_log(&self) -> Vec<AccessLogEntry> {
        let inner = self.inner.read().unwrap();
        inner.access_log.entries().to_vec()
    }

    /// Number of blocks, including genesis.
    pub fn len(&self) -> usize {
        let inner = self.inner.read().unwrap();
        inner.chain.len()
    }

    /// A ledger always holds at least the genesis block.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Digest of the most recent block.
    pub fn head_hash(&self) -> BlockHash {
        let inner = self.inner.read().unwrap();
        inner.chain.head().hash
    }

    /// When this ledger was constructed (Unix milliseconds).
    pub fn started_at_ms(&self) -> i64 {
        self.started_at_ms
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

/// Get current time in milliseconds.
fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_millis() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_ledger_genesis_invariant() {
        let ledger = Ledger::new();
        assert_eq!(ledger.len(), 1);
        assert!(ledger.access_log().is_empty());

        let genesis = ledger.get(0).unwrap();
        assert_eq!(genesis.index, 0);
        assert_eq!(genesis.previous_hash, BlockHash::ZERO);
        assert!(ledger.is_valid());
    }

    #[test]
    fn test_append_grows_chain_and_log() {
        let ledger = Ledger::new();
        for i in 0..5 {
            ledger
                .append(format!("payload {i}").into_bytes(), Actor::new("alice", "writer"))
                .unwrap();
        }

        assert_eq!(ledger.len(), 6);
        assert_eq!(ledger.access_log().len(), 5);
        assert!(ledger.is_valid());
    }

    #[test]
    fn test_append_links_blocks() {
        let ledger = Ledger::new();
        let b1 = ledger.append(&b"one"[..], Actor::new("alice", "writer")).unwrap();
        let b2 = ledger.append(&b"two"[..], Actor::new("alice", "writer")).unwrap();

        assert_eq!(b1.index, 1);
        assert_eq!(b2.index, 2);
        assert_eq!(b2.previous_hash, b1.hash);
        assert_eq!(ledger.head_hash(), b2.hash);
    }

    #[test]
    fn test_access_log_entry_contents() {
        let ledger = Ledger::new();
        ledger.append(&b"data"[..], Actor::new("bob", "analyst")).unwrap();

        let log = ledger.access_log();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].user, "bob");
        assert_eq!(log[0].role, "analyst");
        assert_eq!(log[0].action, ACTION_STORE);
        assert!(log[0].timestamp_ms >= ledger.started_at_ms());
    }

    #[test]
    fn test_payload_cap_enforced_atomically() {
        let ledger = Ledger::with_config(LedgerConfig {
            max_payload_bytes: Some(8),
        });

        let result = ledger.append(vec![0u8; 9], Actor::new("alice", "writer"));
        assert!(matches!(
            result,
            Err(LedgerError::PayloadTooLarge { len: 9, max: 8 })
        ));

        // The rejected append left no partial block and no orphan entry.
        assert_eq!(ledger.len(), 1);
        assert!(ledger.access_log().is_empty());

        ledger.append(vec![0u8; 8], Actor::new("alice", "writer")).unwrap();
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.access_log().len(), 1);
    }

    #[test]
    fn test_get_all_summaries_in_order() {
        let ledger = Ledger::new();
        ledger.append(&b"first"[..], Actor::new("alice", "writer")).unwrap();
        ledger.append(&b"second"[..], Actor::new("bob", "analyst")).unwrap();

        let summaries = ledger.get_all();
        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[0].index, 0);
        assert_eq!(summaries[1].data, "first");
        assert_eq!(summaries[2].user, "bob");
        assert_eq!(summaries[2].previous_hash, summaries[1].hash);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn arbitrary_appends_stay_valid(
                payloads in proptest::collection::vec(
                    proptest::collection::vec(any::<u8>(), 0..64),
                    0..16,
                ),
            ) {
                let ledger = Ledger::new();
                for payload in &payloads {
                    ledger
                        .append(payload.clone(), Actor::new("alice", "writer"))
                        .unwrap();
                }
                prop_assert_eq!(ledger.len(), payloads.len() + 1);
                prop_assert_eq!(ledger.access_log().len(), payloads.len());
                prop_assert!(ledger.is_valid());
            }
        }
    }

    #[test]
    fn test_concurrent_appends_stay_linear() {
        use std::sync::Arc;
        use std::thread;

        let ledger = Arc::new(Ledger::new());
        let mut handles = Vec::new();
        for t in 0..4 {
            let ledger = Arc::clone(&ledger);
            handles.push(thread::spawn(move || {
                for i in 0..25 {
                    ledger
                        .append(
                            format!("t{t} p{i}").into_bytes(),
                            Actor::new(format!("worker-{t}"), "writer"),
                        )
                        .unwrap();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(ledger.len(), 101);
        assert_eq!(ledger.access_log().len(), 100);
        assert!(ledger.is_valid());
    }
}
