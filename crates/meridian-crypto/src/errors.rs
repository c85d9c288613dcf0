//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Signature algorithm wire code is not a supported curve
    #[error("Unsupported signature algorithm code: {0}")]
    UnsupportedSignatureAlgorithm(u32),

    /// Hash algorithm wire code is not supported
    #[error("Unsupported hash algorithm code: {0}")]
    UnsupportedHashAlgorithm(u32),

    /// Invalid public key
    #[error("Invalid public key")]
    InvalidPublicKey,

    /// Invalid private key
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// Key material is not valid hex
    #[error("Invalid hex key material")]
    InvalidKeyHex,

    /// Invalid signature
    #[error("Invalid signature")]
    InvalidSignature,

    /// Malformed ASN.1 DER signature
    #[error("Malformed DER signature: {0}")]
    MalformedSignature(String),

    /// Signing failed inside the curve backend
    #[error("Signing failed")]
    SigningFailed,
}
