//! # Transactions
//!
//! The transaction entity, its RLP canonical encodings, and the
//! two-phase signing flow.
//!
//! Signing happens in two layers. The proposer and authorizers sign the
//! *payload*; the payer signs the *envelope*, which wraps the payload
//! together with the payload signatures already collected. The payer
//! therefore commits to exactly what everyone else agreed to, and the
//! transaction id commits to all of it.

use crate::address::Address;
use crate::hash::Hash;
use meridian_crypto::{CryptoError, Signer};
use rlp::RlpStream;
use sha3::{Digest, Sha3_256};

/// Domain tag prepended to every signable transaction message,
/// right-padded with zeros to 32 bytes. Namespaces signatures so they
/// cannot be replayed for another purpose.
pub const TRANSACTION_DOMAIN_TAG: [u8; 32] = padded_domain_tag(b"MERIDIAN-V0.0-transaction");

const fn padded_domain_tag(tag: &[u8]) -> [u8; 32] {
    let mut padded = [0u8; 32];
    let mut i = 0;
    while i < tag.len() {
        padded[i] = tag[i];
        i += 1;
    }
    padded
}

/// A transaction: a script with arguments plus the accounts that
/// propose, pay for, and authorize it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transaction {
    /// Source of the script to execute.
    pub script: Vec<u8>,
    /// Encoded arguments passed to the script, in declaration order.
    pub arguments: Vec<Vec<u8>>,
    /// Block the transaction is pinned to for expiry.
    pub reference_block_id: Hash,
    /// Maximum computation the payer will fund.
    pub gas_limit: u64,
    /// Proposing account key and its replay-protection sequence number.
    pub proposal_key: ProposalKey,
    /// Account that pays for the transaction.
    pub payer: Address,
    /// Accounts whose state the transaction may mutate.
    pub authorizers: Vec<Address>,
    /// Signatures over the payload, in the order they were attached.
    pub payload_signatures: Vec<TransactionSignature>,
    /// Signatures over the envelope, in the order they were attached.
    pub envelope_signatures: Vec<TransactionSignature>,
}

/// The proposer's account key reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProposalKey {
    /// Proposing account.
    pub address: Address,
    /// Index of the key on the proposing account.
    pub key_index: u32,
    /// Sequence number of that key, incremented once per transaction.
    pub sequence_number: u64,
}

/// A signature attached to a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransactionSignature {
    /// Account that produced the signature.
    pub address: Address,
    /// Index of the signing key on that account.
    pub key_index: u32,
    /// Raw fixed-width `R || S` signature bytes.
    pub signature: Vec<u8>,
}

impl Transaction {
    /// RLP canonical form of the payload: the content payload signatures
    /// commit to.
    pub fn payload_canonical_form(&self) -> Vec<u8> {
        let mut stream = RlpStream::new_list(7);
        self.append_payload_fields(&mut stream);
        stream.as_raw().to_vec()
    }

    /// RLP canonical form of the envelope: the payload plus the payload
    /// signatures, which the payer commits to.
    pub fn envelope_canonical_form(&self) -> Vec<u8> {
        let mut stream = RlpStream::new_list(2);
        stream.begin_list(7);
        self.append_payload_fields(&mut stream);
        append_signatures(&mut stream, &self.payload_signatures);
        stream.as_raw().to_vec()
    }

    /// The byte string payload signers sign: domain tag plus payload
    /// canonical form.
    pub fn payload_message(&self) -> Vec<u8> {
        let mut message = TRANSACTION_DOMAIN_TAG.to_vec();
        message.extend_from_slice(&self.payload_canonical_form());
        message
    }

    /// The byte string the payer signs: domain tag plus envelope
    /// canonical form.
    pub fn envelope_message(&self) -> Vec<u8> {
        let mut message = TRANSACTION_DOMAIN_TAG.to_vec();
        message.extend_from_slice(&self.envelope_canonical_form());
        message
    }

    /// Content identifier: SHA3-256 over the full canonical encoding,
    /// envelope signatures included. Computed on demand, never stored.
    pub fn id(&self) -> Hash {
        let mut stream = RlpStream::new_list(3);
        stream.begin_list(7);
        self.append_payload_fields(&mut stream);
        append_signatures(&mut stream, &self.payload_signatures);
        append_signatures(&mut stream, &self.envelope_signatures);

        let mut hasher = Sha3_256::new();
        hasher.update(stream.as_raw());
        hasher.finalize().into()
    }

    /// Attach an externally produced payload signature.
    pub fn add_payload_signature(&mut self, address: Address, key_index: u32, signature: Vec<u8>) {
        self.payload_signatures.push(TransactionSignature {
            address,
            key_index,
            signature,
        });
    }

    /// Attach an externally produced envelope signature.
    pub fn add_envelope_signature(&mut self, address: Address, key_index: u32, signature: Vec<u8>) {
        self.envelope_signatures.push(TransactionSignature {
            address,
            key_index,
            signature,
        });
    }

    /// Sign the payload with `signer` on behalf of the given account key
    /// and attach the signature. For proposers and authorizers; the payer
    /// signs the envelope instead.
    pub fn sign_payload(
        &mut self,
        address: Address,
        key_index: u32,
        signer: &dyn Signer,
    ) -> Result<(), CryptoError> {
        let signature = signer.sign(&self.payload_message())?;
        self.add_payload_signature(address, key_index, signature);
        Ok(())
    }

    /// Sign the envelope with `signer` on behalf of the given account key
    /// and attach the signature. Call after all payload signatures are in
    /// place; envelope signatures added later do not invalidate earlier
    /// ones.
    pub fn sign_envelope(
        &mut self,
        address: Address,
        key_index: u32,
        signer: &dyn Signer,
    ) -> Result<(), CryptoError> {
        let signature = signer.sign(&self.envelope_message())?;
        self.add_envelope_signature(address, key_index, signature);
        Ok(())
    }

    fn append_payload_fields(&self, stream: &mut RlpStream) {
        stream.append(&self.script);
        stream.begin_list(self.arguments.len());
        for argument in &self.arguments {
            stream.append(argument);
        }
        stream.append(&self.reference_block_id.to_vec());
        stream.append(&self.gas_limit);
        stream.begin_list(3);
        stream.append(&self.proposal_key.address);
        stream.append(&self.proposal_key.key_index);
        stream.append(&self.proposal_key.sequence_number);
        stream.append(&self.payer);
        stream.begin_list(self.authorizers.len());
        for authorizer in &self.authorizers {
            stream.append(authorizer);
        }
    }
}

fn append_signatures(stream: &mut RlpStream, signatures: &[TransactionSignature]) {
    stream.begin_list(signatures.len());
    for signature in signatures {
        stream.begin_list(3);
        stream.append(&signature.address);
        stream.append(&signature.key_index);
        stream.append(&signature.signature);
    }
}
