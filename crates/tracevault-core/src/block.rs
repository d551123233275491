//! Block: the immutable unit of ledger data.
//!
//! A block is sealed at construction: its digest is computed over the
//! canonical encoding of its fields and never changes. Changes to the
//! ledger are represented as new blocks.

use bytes::Bytes;
use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::canonical::canonical_block_bytes;
use crate::types::{Actor, BlockHash};

/// Fixed placeholder payload carried by the genesis block.
pub const GENESIS_PAYLOAD: &[u8] = b"genesis";

/// Maximum number of payload bytes rendered in a summary preview.
pub const PAYLOAD_PREVIEW_LEN: usize = 100;

/// Marker appended to a truncated payload preview.
pub const PAYLOAD_PREVIEW_MARKER: &str = "...";

/// One immutable unit of ledger data.
///
/// Fields are public for reading; the chain owns construction and ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Position in the chain, starting at 0 for genesis.
    pub index: u64,

    /// Opaque payload bytes (typically a sealed envelope).
    pub payload: Bytes,

    /// Digest of the preceding block; [`BlockHash::ZERO`] for genesis.
    pub previous_hash: BlockHash,

    /// Wall-clock capture at block creation (Unix milliseconds).
    pub timestamp_ms: i64,

    /// Who triggered the append.
    pub actor: Actor,

    /// Digest over the canonical encoding of the fields above.
    pub hash: BlockHash,
}

impl Block {
    /// Seal a new block: compute its digest immediately and store it.
    ///
    /// Pure constructor; the block is never mutated after return.
    pub fn seal(
        index: u64,
        payload: impl Into<Bytes>,
        previous_hash: BlockHash,
        timestamp_ms: i64,
        actor: Actor,
    ) -> Self {
        let payload = payload.into();
        let hash = BlockHash::digest(&canonical_block_bytes(
            index,
            &payload,
            &previous_hash,
            timestamp_ms,
            &actor,
        ));
        Self {
            index,
            payload,
            previous_hash,
            timestamp_ms,
            actor,
            hash,
        }
    }

    /// Construct the genesis block: index 0, zero predecessor, system actor.
    pub fn genesis(timestamp_ms: i64) -> Self {
        Self::seal(
            0,
            GENESIS_PAYLOAD,
            BlockHash::ZERO,
            timestamp_ms,
            Actor::system(),
        )
    }

    /// Recompute the digest from the stored fields.
    ///
    /// A block is self-consistent iff `content_hash() == hash`.
    pub fn content_hash(&self) -> BlockHash {
        BlockHash::digest(&canonical_block_bytes(
            self.index,
            &self.payload,
            &self.previous_hash,
            self.timestamp_ms,
            &self.actor,
        ))
    }

    /// Whether this block is the genesis block.
    pub fn is_genesis(&self) -> bool {
        self.index == 0 && self.previous_hash == BlockHash::ZERO
    }

    /// Project this block into a bounded, human-readable summary.
    ///
    /// Read-only view; not part of chain integrity.
    pub fn summary(&self) -> BlockSummary {
        BlockSummary {
            index: self.index,
            timestamp: format_timestamp(self.timestamp_ms),
            hash: self.hash.to_hex(),
            previous_hash: self.previous_hash.to_hex(),
            user: self.actor.user.clone(),
            role: self.actor.role.clone(),
            data: preview_payload(&self.payload),
        }
    }
}

/// Presentation record for a block: bounded fields, hex digests,
/// formatted timestamp, truncated payload preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSummary {
    pub index: u64,
    pub timestamp: String,
    pub hash: String,
    pub previous_hash: String,
    pub user: String,
    pub role: String,
    pub data: String,
}

/// Render a timestamp as `YYYY-MM-DD HH:MM:SS` (UTC).
fn format_timestamp(timestamp_ms: i64) -> String {
    match DateTime::from_timestamp_millis(timestamp_ms) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => timestamp_ms.to_string(),
    }
}

/// Uniform byte preview: lossy UTF-8 of the first [`PAYLOAD_PREVIEW_LEN`]
/// payload bytes, with [`PAYLOAD_PREVIEW_MARKER`] appended when truncated.
fn preview_payload(payload: &[u8]) -> String {
    if payload.len() <= PAYLOAD_PREVIEW_LEN {
        String::from_utf8_lossy(payload).into_owned()
    } else {
        let mut preview = String::from_utf8_lossy(&payload[..PAYLOAD_PREVIEW_LEN]).into_owned();
        preview.push_str(PAYLOAD_PREVIEW_MARKER);
        preview
    }
}
