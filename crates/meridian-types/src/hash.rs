//! Entity identifiers.

/// A 32-byte SHA3-256 entity identifier.
pub type Hash = [u8; 32];

/// Length in bytes of a [`Hash`].
pub const HASH_LENGTH: usize = 32;

/// Build a hash from arbitrary bytes.
///
/// Keeps the last 32 bytes of longer input and right-aligns shorter input
/// over leading zeros, so identifiers coming off the wire always map to a
/// fixed-width value.
pub fn hash_from_bytes(bytes: &[u8]) -> Hash {
    let mut hash = [0u8; HASH_LENGTH];
    if bytes.len() >= HASH_LENGTH {
        hash.copy_from_slice(&bytes[bytes.len() - HASH_LENGTH..]);
    } else {
        hash[HASH_LENGTH - bytes.len()..].copy_from_slice(bytes);
    }
    hash
}
