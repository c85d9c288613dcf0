//! # Account Addresses
//!
//! Fixed-width 8-byte account identifiers with hex display and parsing.

use crate::errors::AddressError;
use std::fmt;
use std::str::FromStr;

/// An 8-byte account address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Address([u8; 8]);

impl Address {
    /// Address width in bytes.
    pub const LENGTH: usize = 8;

    /// The all-zero address.
    pub const EMPTY: Address = Address([0u8; 8]);

    /// Construct from exactly 8 bytes.
    pub fn new(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    /// Construct from arbitrary bytes.
    ///
    /// Keeps the last 8 bytes of longer input and right-aligns shorter
    /// input over leading zeros; never fails.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut address = [0u8; Self::LENGTH];
        if bytes.len() >= Self::LENGTH {
            address.copy_from_slice(&bytes[bytes.len() - Self::LENGTH..]);
        } else {
            address[Self::LENGTH - bytes.len()..].copy_from_slice(bytes);
        }
        Self(address)
    }

    /// Raw address bytes.
    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    /// Lowercase hex rendering without a prefix.
    pub fn hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl FromStr for Address {
    type Err = AddressError;

    /// Parse 16 hex characters, with an optional `0x` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(stripped).map_err(|_| AddressError::InvalidHex)?;
        if bytes.len() != Self::LENGTH {
            return Err(AddressError::InvalidLength(bytes.len()));
        }
        Ok(Self::from_bytes(&bytes))
    }
}

impl From<[u8; 8]> for Address {
    fn from(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }
}

impl rlp::Encodable for Address {
    fn rlp_append(&self, s: &mut rlp::RlpStream) {
        s.encoder().encode_value(&self.0);
    }
}
