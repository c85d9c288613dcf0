//! # Meridian Crypto - Cryptographic Provider
//!
//! Key handling, message digests, signing, and signature normalization for
//! the Meridian SDK.
//!
//! ## Components
//!
//! | Module | Contents | Use Case |
//! |--------|----------|----------|
//! | `algorithms` | `SignatureAlgorithm`, `HashAlgorithm` | Wire codes, curve widths |
//! | `hashing` | SHA-2 / SHA-3 digests | Signing messages, identifiers |
//! | `keys` | `PublicKey`, `PrivateKey` | Account key material |
//! | `normalize` | ASN.1 DER to raw signature conversion | Storing signatures |
//! | `signer` | `Signer`, `InMemorySigner` | Transaction signing |
//!
//! ## Security Properties
//!
//! - RFC 6979 deterministic nonces (no RNG dependency for signing)
//! - Curve points validated on decode
//! - Secret scalars zeroized on drop, temporary key buffers scrubbed

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod errors;
pub mod hashing;
pub mod keys;
pub mod normalize;
pub mod signer;

// Re-exports
pub use algorithms::{HashAlgorithm, SignatureAlgorithm};
pub use errors::CryptoError;
pub use hashing::{digest, Hasher};
pub use keys::{PrivateKey, PublicKey};
pub use normalize::normalize_signature;
pub use signer::{InMemorySigner, Signer};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
