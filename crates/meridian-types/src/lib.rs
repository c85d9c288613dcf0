//! # Meridian Types Crate
//!
//! Domain entities for the Meridian SDK: addresses, block headers,
//! accounts, events, and transactions with their canonical encodings.
//!
//! ## Design Principles
//!
//! - **Plain values**: entities carry no wire schema; mapping to and from
//!   wire messages lives in `meridian-convert`.
//! - **Derived identifiers**: block and transaction ids are computed from
//!   content, never stored.
//! - **Total byte conversions**: fixed-width identifiers accept arbitrary
//!   byte lengths by right-aligning, so decoding never fails on width.

pub mod account;
pub mod address;
pub mod block;
pub mod errors;
pub mod event;
pub mod hash;
pub mod transaction;

pub use account::{Account, AccountKey, WEIGHT_THRESHOLD};
pub use address::Address;
pub use block::BlockHeader;
pub use errors::AddressError;
pub use event::Event;
pub use hash::{hash_from_bytes, Hash, HASH_LENGTH};
pub use transaction::{ProposalKey, Transaction, TransactionSignature, TRANSACTION_DOMAIN_TAG};
