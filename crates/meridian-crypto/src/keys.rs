//! # Public and Private Keys
//!
//! ECDSA key material on the two supported curves. Public keys travel as
//! SEC1-encoded curve points and always encode back in uncompressed form;
//! private keys stay in process memory unless explicitly exported.

use crate::{hashing, CryptoError, HashAlgorithm, SignatureAlgorithm};
use k256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use std::fmt;
use zeroize::Zeroize;

#[derive(Clone, Debug)]
enum PublicKeyData {
    P256(p256::ecdsa::VerifyingKey),
    Secp256k1(k256::ecdsa::VerifyingKey),
}

/// A validated ECDSA public key on one of the supported curves.
#[derive(Clone, Debug)]
pub struct PublicKey {
    data: PublicKeyData,
}

impl PublicKey {
    /// Decode a SEC1-encoded curve point for the given algorithm.
    ///
    /// Accepts compressed and uncompressed encodings; the point is
    /// validated by the curve backend. Wrong length or an off-curve point
    /// is [`CryptoError::InvalidPublicKey`].
    pub fn decode(algorithm: SignatureAlgorithm, bytes: &[u8]) -> Result<Self, CryptoError> {
        let data = match algorithm {
            SignatureAlgorithm::EcdsaP256 => p256::ecdsa::VerifyingKey::from_sec1_bytes(bytes)
                .map(PublicKeyData::P256)
                .map_err(|_| CryptoError::InvalidPublicKey)?,
            SignatureAlgorithm::EcdsaSecp256k1 => k256::ecdsa::VerifyingKey::from_sec1_bytes(bytes)
                .map(PublicKeyData::Secp256k1)
                .map_err(|_| CryptoError::InvalidPublicKey)?,
        };
        Ok(Self { data })
    }

    /// The curve this key lives on.
    pub fn algorithm(&self) -> SignatureAlgorithm {
        match self.data {
            PublicKeyData::P256(_) => SignatureAlgorithm::EcdsaP256,
            PublicKeyData::Secp256k1(_) => SignatureAlgorithm::EcdsaSecp256k1,
        }
    }

    /// Encode as an uncompressed SEC1 point (65 bytes).
    ///
    /// The contract is fallible so that providers backed by external key
    /// stores can surface export failures; the in-process curve backends
    /// cannot fail here.
    pub fn encode(&self) -> Result<Vec<u8>, CryptoError> {
        let bytes = match &self.data {
            PublicKeyData::P256(key) => key.to_encoded_point(false).as_bytes().to_vec(),
            PublicKeyData::Secp256k1(key) => key.to_encoded_point(false).as_bytes().to_vec(),
        };
        Ok(bytes)
    }

    /// Verify a raw `R || S` signature over `message`.
    ///
    /// The message is digested with `hash_algorithm` first. A well-formed
    /// signature that does not match returns `Ok(false)`; a signature that
    /// is not `2 x scalar_size` bytes of in-range scalars is
    /// [`CryptoError::InvalidSignature`].
    pub fn verify(
        &self,
        message: &[u8],
        signature: &[u8],
        hash_algorithm: HashAlgorithm,
    ) -> Result<bool, CryptoError> {
        let prehash = hashing::digest(hash_algorithm, message);
        match &self.data {
            PublicKeyData::P256(key) => {
                let sig = p256::ecdsa::Signature::from_slice(signature)
                    .map_err(|_| CryptoError::InvalidSignature)?;
                Ok(key.verify_prehash(&prehash, &sig).is_ok())
            }
            PublicKeyData::Secp256k1(key) => {
                let sig = k256::ecdsa::Signature::from_slice(signature)
                    .map_err(|_| CryptoError::InvalidSignature)?;
                Ok(key.verify_prehash(&prehash, &sig).is_ok())
            }
        }
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        match (&self.data, &other.data) {
            (PublicKeyData::P256(a), PublicKeyData::P256(b)) => {
                a.to_encoded_point(false) == b.to_encoded_point(false)
            }
            (PublicKeyData::Secp256k1(a), PublicKeyData::Secp256k1(b)) => {
                a.to_encoded_point(false) == b.to_encoded_point(false)
            }
            _ => false,
        }
    }
}

impl Eq for PublicKey {}

enum PrivateKeyData {
    P256(p256::ecdsa::SigningKey),
    Secp256k1(k256::ecdsa::SigningKey),
}

/// An ECDSA private key on one of the supported curves.
///
/// The curve backends zeroize the secret scalar on drop.
pub struct PrivateKey {
    data: PrivateKeyData,
}

impl PrivateKey {
    /// Generate a fresh random key for `algorithm`.
    pub fn generate(algorithm: SignatureAlgorithm) -> Self {
        let data = match algorithm {
            SignatureAlgorithm::EcdsaP256 => {
                PrivateKeyData::P256(p256::ecdsa::SigningKey::random(&mut rand::thread_rng()))
            }
            SignatureAlgorithm::EcdsaSecp256k1 => {
                PrivateKeyData::Secp256k1(k256::ecdsa::SigningKey::random(&mut rand::thread_rng()))
            }
        };
        Self { data }
    }

    /// Restore a key from its raw 32-byte scalar.
    pub fn from_bytes(algorithm: SignatureAlgorithm, bytes: &[u8]) -> Result<Self, CryptoError> {
        let data = match algorithm {
            SignatureAlgorithm::EcdsaP256 => p256::ecdsa::SigningKey::from_slice(bytes)
                .map(PrivateKeyData::P256)
                .map_err(|_| CryptoError::InvalidPrivateKey)?,
            SignatureAlgorithm::EcdsaSecp256k1 => k256::ecdsa::SigningKey::from_slice(bytes)
                .map(PrivateKeyData::Secp256k1)
                .map_err(|_| CryptoError::InvalidPrivateKey)?,
        };
        Ok(Self { data })
    }

    /// Restore a key from a hex-encoded scalar.
    ///
    /// The intermediate byte buffer is zeroized before returning.
    pub fn from_hex(algorithm: SignatureAlgorithm, hex_str: &str) -> Result<Self, CryptoError> {
        let mut bytes = hex::decode(hex_str).map_err(|_| CryptoError::InvalidKeyHex)?;
        let result = Self::from_bytes(algorithm, &bytes);
        bytes.zeroize();
        result
    }

    /// The curve this key lives on.
    pub fn algorithm(&self) -> SignatureAlgorithm {
        match self.data {
            PrivateKeyData::P256(_) => SignatureAlgorithm::EcdsaP256,
            PrivateKeyData::Secp256k1(_) => SignatureAlgorithm::EcdsaSecp256k1,
        }
    }

    /// Export the raw 32-byte scalar. The caller owns scrubbing the copy.
    pub fn to_bytes(&self) -> [u8; 32] {
        match &self.data {
            PrivateKeyData::P256(key) => key.to_bytes().into(),
            PrivateKeyData::Secp256k1(key) => key.to_bytes().into(),
        }
    }

    /// The matching public key.
    pub fn public_key(&self) -> PublicKey {
        let data = match &self.data {
            PrivateKeyData::P256(key) => PublicKeyData::P256(*key.verifying_key()),
            PrivateKeyData::Secp256k1(key) => PublicKeyData::Secp256k1(*key.verifying_key()),
        };
        PublicKey { data }
    }

    /// Sign a prehashed message, returning the raw `R || S` form.
    ///
    /// Nonces are deterministic (RFC 6979), so signing the same digest
    /// twice yields the same signature.
    pub fn sign_prehash(&self, prehash: &[u8]) -> Result<Vec<u8>, CryptoError> {
        match &self.data {
            PrivateKeyData::P256(key) => {
                let sig: p256::ecdsa::Signature = key
                    .sign_prehash(prehash)
                    .map_err(|_| CryptoError::SigningFailed)?;
                Ok(sig.to_bytes().to_vec())
            }
            PrivateKeyData::Secp256k1(key) => {
                let sig: k256::ecdsa::Signature = key
                    .sign_prehash(prehash)
                    .map_err(|_| CryptoError::SigningFailed)?;
                Ok(sig.to_bytes().to_vec())
            }
        }
    }

    /// Sign a prehashed message, returning the ASN.1 DER encoding.
    ///
    /// Interop surface for verifiers that consume DER rather than the raw
    /// fixed-width form.
    pub fn sign_prehash_der(&self, prehash: &[u8]) -> Result<Vec<u8>, CryptoError> {
        match &self.data {
            PrivateKeyData::P256(key) => {
                let sig: p256::ecdsa::Signature = key
                    .sign_prehash(prehash)
                    .map_err(|_| CryptoError::SigningFailed)?;
                Ok(sig.to_der().as_bytes().to_vec())
            }
            PrivateKeyData::Secp256k1(key) => {
                let sig: k256::ecdsa::Signature = key
                    .sign_prehash(prehash)
                    .map_err(|_| CryptoError::SigningFailed)?;
                Ok(sig.to_der().as_bytes().to_vec())
            }
        }
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("algorithm", &self.algorithm())
            .finish_non_exhaustive()
    }
}
