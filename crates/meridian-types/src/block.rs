//! Block headers.

use crate::hash::Hash;
use sha3::{Digest, Sha3_256};

/// The slice of a block header the SDK needs: parent linkage and height,
/// enough to pin transactions to a reference block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockHeader {
    /// Identifier of the parent block.
    pub parent_id: Hash,
    /// Block height in the chain.
    pub height: u64,
}

impl BlockHeader {
    /// Content identifier: SHA3-256 over the parent id and the big-endian
    /// height. Computed on demand, never stored.
    pub fn id(&self) -> Hash {
        let mut hasher = Sha3_256::new();
        hasher.update(self.parent_id);
        hasher.update(self.height.to_be_bytes());
        hasher.finalize().into()
    }
}
