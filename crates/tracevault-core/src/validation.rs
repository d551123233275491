//! Chain validation: digest self-consistency and predecessor linkage.
//!
//! Tamper detection is queryable state, not a thrown fault: callers get a
//! boolean (or the first fault found) and decide how to report it.

use thiserror::Error;

use crate::block::Block;
use crate::types::BlockHash;

/// The first integrity fault found in a chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainFault {
    /// A block's stored digest does not match its recomputed contents.
    #[error("block {index}: stored hash does not match recomputed contents")]
    HashMismatch { index: u64 },

    /// A block's predecessor digest does not match the previous block.
    #[error("block {index}: previous_hash does not match the block before it")]
    BrokenLink { index: u64 },

    /// A block's index does not match its chain position.
    #[error("block at position {expected} carries index {found}")]
    IndexMismatch { expected: u64, found: u64 },

    /// The genesis block does not carry the zero predecessor sentinel.
    #[error("genesis block predecessor is not the zero sentinel")]
    GenesisPredecessor,
}

/// Audit a chain, returning the first fault found.
///
/// Checks every block from index 0 upward (genesis self-consistency is
/// verified too) for:
/// - index continuity (`blocks[i].index == i`)
/// - digest self-consistency (`hash == content_hash()`)
/// - predecessor linkage (`previous_hash == blocks[i-1].hash` for i >= 1,
///   the zero sentinel for genesis)
///
/// Side-effect free and safe to call at any time.
pub fn audit_chain(blocks: &[Block]) -> Result<(), ChainFault> {
    for (position, block) in blocks.iter().enumerate() {
        let position = position as u64;

        if block.index != position {
            return Err(ChainFault::IndexMismatch {
                expected: position,
                found: block.index,
            });
        }

        if block.hash != block.content_hash() {
            return Err(ChainFault::HashMismatch { index: position });
        }

        if position == 0 {
            if block.previous_hash != BlockHash::ZERO {
                return Err(ChainFault::GenesisPredecessor);
            }
        } else if block.previous_hash != blocks[position as usize - 1].hash {
            return Err(ChainFault::BrokenLink { index: position });
        }
    }

    Ok(())
}

/// Whether the chain passes every integrity check.
pub fn is_chain_valid(blocks: &[Block]) -> bool {
    audit_chain(blocks).is_ok()
}
