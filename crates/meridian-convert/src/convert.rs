//! # Wire/Domain Converter
//!
//! Bidirectional mapping between wire messages and domain entities.
//!
//! Decode operations validate everything the wire cannot guarantee:
//! algorithm codes must name supported algorithms, key bytes must be
//! valid curve points, and required messages must actually be present.
//! Byte-width mismatches on ids and addresses are absorbed by the total
//! right-aligned conversions instead of failing.

use crate::errors::ConvertError;
use crate::wire::{
    AccountKeyMessage, AccountMessage, BlockHeaderMessage, EventMessage, ProposalKeyMessage,
    TransactionMessage, TransactionSignatureMessage,
};
use meridian_crypto::{CryptoError, HashAlgorithm, PublicKey, SignatureAlgorithm};
use meridian_types::{
    hash_from_bytes, Account, AccountKey, Address, BlockHeader, Event, ProposalKey, Transaction,
    TransactionSignature,
};
use tracing::debug;

// ===== BLOCK HEADERS =====

/// Decode a block header message.
///
/// Total: the height and parent reference are copied, and the wire `id`
/// is ignored because the identifier is derived from content on demand.
pub fn block_header_from_message(message: &BlockHeaderMessage) -> BlockHeader {
    BlockHeader {
        parent_id: hash_from_bytes(&message.parent_id),
        height: message.height,
    }
}

/// Encode a block header, attaching its derived content hash.
pub fn block_header_to_message(header: &BlockHeader) -> BlockHeaderMessage {
    BlockHeaderMessage {
        id: header.id().to_vec(),
        parent_id: header.parent_id.to_vec(),
        height: header.height,
    }
}

// ===== ACCOUNTS =====

/// Decode an account message.
///
/// `None` is a structurally absent account and fails with
/// [`ConvertError::EmptyMessage`]. Keys are decoded in wire order and
/// the first bad key aborts the conversion.
pub fn account_from_message(message: Option<&AccountMessage>) -> Result<Account, ConvertError> {
    let message = message.ok_or(ConvertError::EmptyMessage("account"))?;

    let mut keys = Vec::with_capacity(message.keys.len());
    for key in &message.keys {
        keys.push(account_key_from_message(Some(key))?);
    }

    let account = Account {
        address: Address::from_bytes(&message.address),
        balance: message.balance,
        code: message.code.clone(),
        keys,
    };

    debug!(
        address = %account.address,
        keys = account.keys.len(),
        "Decoded account message"
    );

    Ok(account)
}

/// Encode an account. The first key that fails to encode aborts the
/// conversion.
pub fn account_to_message(account: &Account) -> Result<AccountMessage, ConvertError> {
    let mut keys = Vec::with_capacity(account.keys.len());
    for key in &account.keys {
        keys.push(account_key_to_message(key)?);
    }

    Ok(AccountMessage {
        address: account.address.as_bytes().to_vec(),
        balance: account.balance,
        code: account.code.clone(),
        keys,
    })
}

/// Decode an account key message.
///
/// The signature algorithm code drives the public-key decode; an unknown
/// code or invalid point is a key-decode failure, never a guessed
/// default. A weight beyond the signed domain range is rejected instead
/// of wrapping.
pub fn account_key_from_message(
    message: Option<&AccountKeyMessage>,
) -> Result<AccountKey, ConvertError> {
    let message = message.ok_or(ConvertError::EmptyMessage("account key"))?;

    let sign_algo = SignatureAlgorithm::from_code(message.sign_algo).ok_or(
        ConvertError::KeyDecode(CryptoError::UnsupportedSignatureAlgorithm(message.sign_algo)),
    )?;
    let hash_algorithm = HashAlgorithm::from_code(message.hash_algo).ok_or(
        ConvertError::KeyDecode(CryptoError::UnsupportedHashAlgorithm(message.hash_algo)),
    )?;
    let public_key =
        PublicKey::decode(sign_algo, &message.public_key).map_err(ConvertError::KeyDecode)?;
    let weight = i32::try_from(message.weight)
        .map_err(|_| ConvertError::InvalidWeight(i64::from(message.weight)))?;

    Ok(AccountKey {
        public_key,
        hash_algorithm,
        weight,
    })
}

/// Encode an account key. A negative weight has no wire form and is
/// rejected.
pub fn account_key_to_message(key: &AccountKey) -> Result<AccountKeyMessage, ConvertError> {
    let public_key = key.public_key.encode().map_err(ConvertError::KeyEncode)?;
    let weight = u32::try_from(key.weight)
        .map_err(|_| ConvertError::InvalidWeight(i64::from(key.weight)))?;

    Ok(AccountKeyMessage {
        public_key,
        sign_algo: key.signature_algorithm().code(),
        hash_algo: key.hash_algorithm.code(),
        weight,
    })
}

// ===== EVENTS =====

/// Decode an event message. Total structural copy.
pub fn event_from_message(message: &EventMessage) -> Event {
    Event {
        event_type: message.event_type.clone(),
        transaction_id: hash_from_bytes(&message.transaction_id),
        event_index: message.event_index,
        payload: message.payload.clone(),
    }
}

/// Encode an event. Total structural copy.
pub fn event_to_message(event: &Event) -> EventMessage {
    EventMessage {
        event_type: event.event_type.clone(),
        transaction_id: event.transaction_id.to_vec(),
        event_index: event.event_index,
        payload: event.payload.clone(),
    }
}

// ===== TRANSACTIONS =====

/// Decode a transaction message.
///
/// `None` and an absent nested proposal key are structural failures;
/// everything else maps field for field.
pub fn transaction_from_message(
    message: Option<&TransactionMessage>,
) -> Result<Transaction, ConvertError> {
    let message = message.ok_or(ConvertError::EmptyMessage("transaction"))?;
    let proposal_key = message
        .proposal_key
        .as_ref()
        .ok_or(ConvertError::EmptyMessage("proposal key"))?;

    let transaction = Transaction {
        script: message.script.clone(),
        arguments: message.arguments.clone(),
        reference_block_id: hash_from_bytes(&message.reference_block_id),
        gas_limit: message.gas_limit,
        proposal_key: ProposalKey {
            address: Address::from_bytes(&proposal_key.address),
            key_index: proposal_key.key_index,
            sequence_number: proposal_key.sequence_number,
        },
        payer: Address::from_bytes(&message.payer),
        authorizers: message
            .authorizers
            .iter()
            .map(|address| Address::from_bytes(address))
            .collect(),
        payload_signatures: message
            .payload_signatures
            .iter()
            .map(signature_from_message)
            .collect(),
        envelope_signatures: message
            .envelope_signatures
            .iter()
            .map(signature_from_message)
            .collect(),
    };

    debug!(
        id = %hex::encode(transaction.id()),
        authorizers = transaction.authorizers.len(),
        "Decoded transaction message"
    );

    Ok(transaction)
}

/// Encode a transaction. Total.
pub fn transaction_to_message(transaction: &Transaction) -> TransactionMessage {
    TransactionMessage {
        script: transaction.script.clone(),
        arguments: transaction.arguments.clone(),
        reference_block_id: transaction.reference_block_id.to_vec(),
        gas_limit: transaction.gas_limit,
        proposal_key: Some(ProposalKeyMessage {
            address: transaction.proposal_key.address.as_bytes().to_vec(),
            key_index: transaction.proposal_key.key_index,
            sequence_number: transaction.proposal_key.sequence_number,
        }),
        payer: transaction.payer.as_bytes().to_vec(),
        authorizers: transaction
            .authorizers
            .iter()
            .map(|address| address.as_bytes().to_vec())
            .collect(),
        payload_signatures: transaction
            .payload_signatures
            .iter()
            .map(signature_to_message)
            .collect(),
        envelope_signatures: transaction
            .envelope_signatures
            .iter()
            .map(signature_to_message)
            .collect(),
    }
}

fn signature_from_message(message: &TransactionSignatureMessage) -> TransactionSignature {
    TransactionSignature {
        address: Address::from_bytes(&message.address),
        key_index: message.key_index,
        signature: message.signature.clone(),
    }
}

fn signature_to_message(signature: &TransactionSignature) -> TransactionSignatureMessage {
    TransactionSignatureMessage {
        address: signature.address.as_bytes().to_vec(),
        key_index: signature.key_index,
        signature: signature.signature.clone(),
    }
}
