//! # Message Hashing
//!
//! One-shot and streaming digests over the supported hash algorithms.
//!
//! Signing flows hash the full message here and hand the digest to the
//! curve backend, so the hash choice stays independent of the curve.

use crate::HashAlgorithm;
use sha2::{Digest, Sha256, Sha384};
use sha3::{Sha3_256, Sha3_384};

/// Hash `data` with `algorithm` (one-shot).
pub fn digest(algorithm: HashAlgorithm, data: &[u8]) -> Vec<u8> {
    match algorithm {
        HashAlgorithm::Sha2_256 => Sha256::digest(data).to_vec(),
        HashAlgorithm::Sha2_384 => Sha384::digest(data).to_vec(),
        HashAlgorithm::Sha3_256 => Sha3_256::digest(data).to_vec(),
        HashAlgorithm::Sha3_384 => Sha3_384::digest(data).to_vec(),
    }
}

enum HasherState {
    Sha2_256(Sha256),
    Sha2_384(Sha384),
    Sha3_256(Sha3_256),
    Sha3_384(Sha3_384),
}

/// Stateful hasher over one of the supported algorithms.
pub struct Hasher {
    state: HasherState,
}

impl Hasher {
    /// Create a new hasher for `algorithm`.
    pub fn new(algorithm: HashAlgorithm) -> Self {
        let state = match algorithm {
            HashAlgorithm::Sha2_256 => HasherState::Sha2_256(Sha256::new()),
            HashAlgorithm::Sha2_384 => HasherState::Sha2_384(Sha384::new()),
            HashAlgorithm::Sha3_256 => HasherState::Sha3_256(Sha3_256::new()),
            HashAlgorithm::Sha3_384 => HasherState::Sha3_384(Sha3_384::new()),
        };
        Self { state }
    }

    /// Update with data.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        match &mut self.state {
            HasherState::Sha2_256(h) => h.update(data),
            HasherState::Sha2_384(h) => h.update(data),
            HasherState::Sha3_256(h) => h.update(data),
            HasherState::Sha3_384(h) => h.update(data),
        }
        self
    }

    /// Finalize and return the digest.
    pub fn finalize(self) -> Vec<u8> {
        match self.state {
            HasherState::Sha2_256(h) => h.finalize().to_vec(),
            HasherState::Sha2_384(h) => h.finalize().to_vec(),
            HasherState::Sha3_256(h) => h.finalize().to_vec(),
            HasherState::Sha3_384(h) => h.finalize().to_vec(),
        }
    }
}
