//! Conversion error types.

use meridian_crypto::CryptoError;
use thiserror::Error;

/// Wire/domain conversion errors.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A required message was structurally absent
    #[error("Empty message: {0}")]
    EmptyMessage(&'static str),

    /// Public key bytes or algorithm codes from the wire could not be
    /// decoded
    #[error("Key decode failed: {0}")]
    KeyDecode(#[source] CryptoError),

    /// A public key could not be re-encoded for the wire
    #[error("Key encode failed: {0}")]
    KeyEncode(#[source] CryptoError),

    /// An account key weight was outside the range shared by the wire
    /// and domain forms
    #[error("Invalid account key weight: {0}")]
    InvalidWeight(i64),

    /// Transport (de)serialization failed
    #[error("Wire serialization failed: {0}")]
    Wire(#[from] bincode::Error),
}
