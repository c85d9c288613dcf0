//! # Algorithm Identifiers
//!
//! Closed enumerations of the signature and hash algorithms the SDK
//! supports, together with the numeric codes they carry on the wire.
//!
//! Every width and dispatch site matches exhaustively on these enums, so
//! adding an algorithm is a compile-checked, single-point change with no
//! runtime default fallthrough.

use std::fmt;

/// Supported ECDSA signature algorithms.
///
/// The discriminants are the account-key wire codes; zero is reserved for
/// "unspecified".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum SignatureAlgorithm {
    /// ECDSA over the NIST P-256 curve.
    EcdsaP256 = 1,
    /// ECDSA over the secp256k1 curve.
    EcdsaSecp256k1 = 2,
}

impl SignatureAlgorithm {
    /// Numeric code used in wire messages.
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Look up an algorithm by its wire code.
    ///
    /// Returns `None` for zero ("unspecified") and for any code this SDK
    /// does not support.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Self::EcdsaP256),
            2 => Some(Self::EcdsaSecp256k1),
            _ => None,
        }
    }

    /// Byte width of one curve scalar, the R or S half of a signature.
    ///
    /// Derived from the curve group order: both supported curves have a
    /// 256-bit order.
    pub fn scalar_size(self) -> usize {
        match self {
            Self::EcdsaP256 => 32,
            Self::EcdsaSecp256k1 => 32,
        }
    }

    /// Byte width of a normalized raw signature (`R || S`).
    pub fn signature_size(self) -> usize {
        2 * self.scalar_size()
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::EcdsaP256 => "ECDSA_P256",
            Self::EcdsaSecp256k1 => "ECDSA_secp256k1",
        };
        f.write_str(name)
    }
}

/// Supported hash algorithms.
///
/// The discriminants are the account-key wire codes; zero is reserved for
/// "unspecified".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum HashAlgorithm {
    /// SHA-2 with a 256-bit digest.
    Sha2_256 = 1,
    /// SHA-2 with a 384-bit digest.
    Sha2_384 = 2,
    /// SHA-3 with a 256-bit digest.
    Sha3_256 = 3,
    /// SHA-3 with a 384-bit digest.
    Sha3_384 = 4,
}

impl HashAlgorithm {
    /// Numeric code used in wire messages.
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Look up an algorithm by its wire code.
    ///
    /// Returns `None` for zero ("unspecified") and for any code this SDK
    /// does not support.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Self::Sha2_256),
            2 => Some(Self::Sha2_384),
            3 => Some(Self::Sha3_256),
            4 => Some(Self::Sha3_384),
            _ => None,
        }
    }

    /// Digest length in bytes.
    pub fn output_size(self) -> usize {
        match self {
            Self::Sha2_256 | Self::Sha3_256 => 32,
            Self::Sha2_384 | Self::Sha3_384 => 48,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sha2_256 => "SHA2_256",
            Self::Sha2_384 => "SHA2_384",
            Self::Sha3_256 => "SHA3_256",
            Self::Sha3_384 => "SHA3_384",
        };
        f.write_str(name)
    }
}
