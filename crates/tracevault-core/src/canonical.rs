//! Canonical encoding of the hashed block fields.
//!
//! This module implements RFC 8949 Core Deterministic Encoding for the
//! fixed set of fields that feed the block digest:
//! - Integer map keys, emitted in ascending order
//! - Integers use smallest valid encoding
//! - Definite lengths only
//! - No floats (timestamps are i64 milliseconds)
//!
//! The canonical encoding is critical: field boundaries are length-prefixed,
//! so semantically different field splits can never collide, and the digest
//! is independent of any language's default string conversion.

use crate::types::{Actor, BlockHash};

/// Canonical-encoding schema version, hashed alongside the fields.
pub const ENCODING_VERSION: u8 = 0;

/// Field keys (integer keys for compact encoding).
///
/// Keys 0-23 encode as single bytes in CBOR.
mod keys {
    pub const VERSION: u64 = 0;
    pub const INDEX: u64 = 1;
    pub const PAYLOAD: u64 = 2;
    pub const PREVIOUS_HASH: u64 = 3;
    pub const TIMESTAMP: u64 = 4;
    pub const USER: u64 = 5;
    pub const ROLE: u64 = 6;
}

/// Encode the hashed block fields to canonical CBOR bytes.
///
/// The result is the exact input to [`BlockHash::digest`] at block
/// construction and during chain validation.
pub fn canonical_block_bytes(
    index: u64,
    payload: &[u8],
    previous_hash: &BlockHash,
    timestamp_ms: i64,
    actor: &Actor,
) -> Vec<u8> {
    let mut buf = Vec::with_capacity(payload.len() + 128);

    // Map header: 7 entries, keys emitted in ascending order (0..=6),
    // which is canonical order for single-byte integer keys.
    encode_uint(&mut buf, 5, 7);

    encode_uint(&mut buf, 0, keys::VERSION);
    encode_uint(&mut buf, 0, ENCODING_VERSION as u64);

    encode_uint(&mut buf, 0, keys::INDEX);
    encode_uint(&mut buf, 0, index);

    encode_uint(&mut buf, 0, keys::PAYLOAD);
    encode_bytes(&mut buf, payload);

    encode_uint(&mut buf, 0, keys::PREVIOUS_HASH);
    encode_bytes(&mut buf, previous_hash.as_bytes());

    encode_uint(&mut buf, 0, keys::TIMESTAMP);
    encode_int(&mut buf, timestamp_ms);

    encode_uint(&mut buf, 0, keys::USER);
    encode_text(&mut buf, &actor.user);

    encode_uint(&mut buf, 0, keys::ROLE);
    encode_text(&mut buf, &actor.role);

    buf
}

/// Encode a signed integer (major types 0 and 1).
fn encode_int(buf: &mut Vec<u8>, n: i64) {
    if n >= 0 {
        // Major type 0: unsigned integer
        encode_uint(buf, 0, n as u64);
    } else {
        // Major type 1: negative integer
        // CBOR encodes -1 as 0, -2 as 1, etc.
        encode_uint(buf, 1, !(n as u64));
    }
}

/// Encode an unsigned integer with the given major type.
fn encode_uint(buf: &mut Vec<u8>, major: u8, n: u64) {
    let mt = major << 5;
    if n < 24 {
        buf.push(mt | (n as u8));
    } else if n <= 0xff {
        buf.push(mt | 24);
        buf.push(n as u8);
    } else if n <= 0xffff {
        buf.push(mt | 25);
        buf.extend_from_slice(&(n as u16).to_be_bytes());
    } else if n <= 0xffffffff {
        buf.push(mt | 26);
        buf.extend_from_slice(&(n as u32).to_be_bytes());
    } else {
        buf.push(mt | 27);
        buf.extend_from_slice(&n.to_be_bytes());
    }
}

/// Encode a byte string (major type 2).
fn encode_bytes(buf: &mut Vec<u8>, bytes: &[u8]) {
    encode_uint(buf, 2, bytes.len() as u64);
    buf.extend_from_slice(bytes);
}

/// Encode a text string (major type 3).
fn encode_text(buf: &mut Vec<u8>, s: &str) {
    encode_uint(buf, 3, s.len() as u64);
    buf.extend_from_slice(s.as_bytes());
}
