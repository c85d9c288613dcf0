//! # Accounts and Account Keys
//!
//! Accounts hold a balance, optional contract code, and an ordered list
//! of public keys. Multiple keys with partial weights implement shared
//! custody: a transaction is authorized once the signing keys' weights
//! sum to the threshold.

use crate::address::Address;
use meridian_crypto::{HashAlgorithm, PublicKey, SignatureAlgorithm};

/// Combined key weight required to authorize a transaction.
pub const WEIGHT_THRESHOLD: i32 = 1000;

/// An account on the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// The account's address.
    pub address: Address,
    /// Balance in the smallest denomination.
    pub balance: u64,
    /// Contract code deployed on the account; empty when none.
    pub code: Vec<u8>,
    /// Keys registered on the account, in registration order.
    ///
    /// A key's index is its position in this list; reordering breaks
    /// signature attribution.
    pub keys: Vec<AccountKey>,
}

/// A public key registered on an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountKey {
    /// The key material; the curve is carried inside.
    pub public_key: PublicKey,
    /// Hash algorithm this key signs with.
    pub hash_algorithm: HashAlgorithm,
    /// Authorization weight toward [`WEIGHT_THRESHOLD`].
    pub weight: i32,
}

impl AccountKey {
    /// The signature algorithm of the underlying key.
    pub fn signature_algorithm(&self) -> SignatureAlgorithm {
        self.public_key.algorithm()
    }
}
