//! # Wire Message Schema
//!
//! Serde models of the access-node messages, plus the bincode transport
//! seam. Byte fields use the compact `Bytes` encoding.
//!
//! Messages mirror the remote schema, so fields stay raw: ids and
//! addresses are plain byte strings and algorithm identifiers are
//! numeric codes. Interpretation happens in [`crate::convert`].

use crate::errors::ConvertError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};

/// Serialize a wire message for transport.
pub fn to_bytes<T: Serialize>(message: &T) -> Result<Vec<u8>, ConvertError> {
    bincode::serialize(message).map_err(ConvertError::Wire)
}

/// Deserialize a wire message from transport bytes.
pub fn from_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ConvertError> {
    bincode::deserialize(bytes).map_err(ConvertError::Wire)
}

/// A block header as served by an access node.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlockHeaderMessage {
    /// Derived content hash; filled on encode, recomputed on decode.
    #[serde_as(as = "Bytes")]
    pub id: Vec<u8>,
    /// Identifier of the parent block.
    #[serde_as(as = "Bytes")]
    pub parent_id: Vec<u8>,
    /// Block height in the chain.
    pub height: u64,
}

/// An account as served by an access node.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccountMessage {
    /// Account address bytes.
    #[serde_as(as = "Bytes")]
    pub address: Vec<u8>,
    /// Balance in the smallest denomination.
    pub balance: u64,
    /// Deployed contract code; empty when none.
    #[serde_as(as = "Bytes")]
    pub code: Vec<u8>,
    /// Registered keys, in registration order.
    pub keys: Vec<AccountKeyMessage>,
}

/// A public key registered on an account.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccountKeyMessage {
    /// SEC1-encoded public key point.
    #[serde_as(as = "Bytes")]
    pub public_key: Vec<u8>,
    /// Signature algorithm code.
    pub sign_algo: u32,
    /// Hash algorithm code.
    pub hash_algo: u32,
    /// Authorization weight.
    pub weight: u32,
}

/// An event emitted by a transaction.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventMessage {
    /// Fully qualified event type identifier.
    pub event_type: String,
    /// Identifier of the emitting transaction.
    #[serde_as(as = "Bytes")]
    pub transaction_id: Vec<u8>,
    /// Zero-based position among the transaction's events.
    pub event_index: u32,
    /// Encoded event payload.
    #[serde_as(as = "Bytes")]
    pub payload: Vec<u8>,
}

/// A transaction in wire form.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionMessage {
    /// Script source.
    #[serde_as(as = "Bytes")]
    pub script: Vec<u8>,
    /// Encoded script arguments.
    #[serde_as(as = "Vec<Bytes>")]
    pub arguments: Vec<Vec<u8>>,
    /// Reference block identifier.
    #[serde_as(as = "Bytes")]
    pub reference_block_id: Vec<u8>,
    /// Gas limit.
    pub gas_limit: u64,
    /// Proposing key; absent on malformed submissions.
    pub proposal_key: Option<ProposalKeyMessage>,
    /// Payer address bytes.
    #[serde_as(as = "Bytes")]
    pub payer: Vec<u8>,
    /// Authorizer address bytes.
    #[serde_as(as = "Vec<Bytes>")]
    pub authorizers: Vec<Vec<u8>>,
    /// Signatures over the payload.
    pub payload_signatures: Vec<TransactionSignatureMessage>,
    /// Signatures over the envelope.
    pub envelope_signatures: Vec<TransactionSignatureMessage>,
}

/// The proposer's key reference inside a transaction message.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProposalKeyMessage {
    /// Proposing account address bytes.
    #[serde_as(as = "Bytes")]
    pub address: Vec<u8>,
    /// Key index on the proposing account.
    pub key_index: u32,
    /// Sequence number of the proposing key.
    pub sequence_number: u64,
}

/// A signature attached to a transaction message.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionSignatureMessage {
    /// Signing account address bytes.
    #[serde_as(as = "Bytes")]
    pub address: Vec<u8>,
    /// Key index on the signing account.
    pub key_index: u32,
    /// Raw fixed-width signature bytes.
    #[serde_as(as = "Bytes")]
    pub signature: Vec<u8>,
}
