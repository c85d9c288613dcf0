//! # Signers
//!
//! The signing abstraction transaction flows call into, plus the
//! in-memory implementation backed by a raw private key.
//!
//! A signer owns both its key material and its hashing policy, so callers
//! hand over the full message rather than a digest. This keeps custodial
//! or hardware-backed implementations possible behind the same trait.

use crate::{hashing, CryptoError, HashAlgorithm, PrivateKey, PublicKey};

/// Something that produces raw `R || S` signatures over messages.
pub trait Signer {
    /// Sign `message`, returning the raw fixed-width signature.
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, CryptoError>;

    /// The public key the signatures verify against.
    fn public_key(&self) -> &PublicKey;
}

/// A [`Signer`] holding its private key in process memory.
pub struct InMemorySigner {
    private_key: PrivateKey,
    hash_algorithm: HashAlgorithm,
    public_key: PublicKey,
}

impl InMemorySigner {
    /// Build a signer from a private key and the hash algorithm its
    /// account key was registered with.
    pub fn new(private_key: PrivateKey, hash_algorithm: HashAlgorithm) -> Self {
        let public_key = private_key.public_key();
        Self {
            private_key,
            hash_algorithm,
            public_key,
        }
    }

    /// The hash algorithm applied to messages before signing.
    pub fn hash_algorithm(&self) -> HashAlgorithm {
        self.hash_algorithm
    }
}

impl Signer for InMemorySigner {
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let prehash = hashing::digest(self.hash_algorithm, message);
        self.private_key.sign_prehash(&prehash)
    }

    fn public_key(&self) -> &PublicKey {
        &self.public_key
    }
}
