//! Chain: the ordered, genesis-rooted, append-only block sequence.
//!
//! A chain is a pure state machine: append reads the tail and seals the
//! successor. There is no delete, no rewrite, no fork. Mutual exclusion
//! for concurrent callers is the owning ledger's job.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::types::{Actor, BlockHash};

/// The ordered block sequence. Index 0 is always the genesis block,
/// created once at construction and never removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chain {
    blocks: Vec<Block>,
}

impl Chain {
    /// Create a chain containing only the genesis block.
    pub fn new(genesis_timestamp_ms: i64) -> Self {
        Self {
            blocks: vec![Block::genesis(genesis_timestamp_ms)],
        }
    }

    /// Append a new block sealed over the current tail.
    ///
    /// Single terminal transition: the block is constructed, linked to the
    /// tail digest, and pushed. Returns a reference to the appended block.
    pub fn append(&mut self, payload: impl Into<Bytes>, actor: Actor, timestamp_ms: i64) -> &Block {
        let previous_hash = self.head().hash;
        let block = Block::seal(
            self.blocks.len() as u64,
            payload,
            previous_hash,
            timestamp_ms,
            actor,
        );
        self.blocks.push(block);
        self.head()
    }

    /// The most recent block. The chain is never empty.
    pub fn head(&self) -> &Block {
        self.blocks.last().expect("chain always holds genesis")
    }

    /// The block at the given index, if present.
    pub fn get(&self, index: u64) -> Option<&Block> {
        self.blocks.get(index as usize)
    }

    /// All blocks in index order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of blocks, including genesis.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// A chain is never empty, but the accessor pair is conventional.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
