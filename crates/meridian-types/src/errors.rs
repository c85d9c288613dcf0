//! Entity error types.

use thiserror::Error;

/// Address parsing errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    /// Input is not valid hex
    #[error("Address is not valid hex")]
    InvalidHex,

    /// Decoded length does not match the address width
    #[error("Address must be 8 bytes, got {0}")]
    InvalidLength(usize),
}
