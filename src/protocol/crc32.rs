//! CRC32 key derivation for card and item IDs.
//!
//! The client keys every card by the CRC32 of its ID string. `crc32fast`
//! implements the same IEEE polynomial as `zlib.crc32`, which the reference
//! server relies on directly.

/// CRC32 (IEEE) hash of a UTF-8 string, masked to an unsigned 32-bit value.
pub fn hash(id: &str) -> u32 {
    crc32fast::hash(id.as_bytes())
}
