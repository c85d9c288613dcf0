//! # Signature Normalization
//!
//! Converts ASN.1 DER ECDSA signatures into the fixed-width raw form the
//! ledger stores: `R || S`, each half left-padded with zeros to the
//! curve's scalar width.
//!
//! Parsing is purely structural. Range checks against the curve group
//! order belong to signature verification, so a zero component still
//! normalizes as long as its encoding fits the scalar width.

use crate::{CryptoError, SignatureAlgorithm};
use der::asn1::UintRef;
use der::{Decode, Sequence};

/// ASN.1 `ECDSA-Sig-Value ::= SEQUENCE { r INTEGER, s INTEGER }`.
#[derive(Sequence)]
struct EcdsaSigValue<'a> {
    r: UintRef<'a>,
    s: UintRef<'a>,
}

/// Normalize a DER-encoded ECDSA signature into raw `R || S` form.
///
/// The output is always exactly `algorithm.signature_size()` bytes. Any
/// structural defect in the input (truncation, wrong tags, trailing
/// bytes, negative or non-minimal integers, a component wider than the
/// scalar width) is [`CryptoError::MalformedSignature`].
pub fn normalize_signature(
    der_bytes: &[u8],
    algorithm: SignatureAlgorithm,
) -> Result<Vec<u8>, CryptoError> {
    let parsed = EcdsaSigValue::from_der(der_bytes)
        .map_err(|e| CryptoError::MalformedSignature(e.to_string()))?;

    let width = algorithm.scalar_size();
    let mut raw = vec![0u8; 2 * width];
    let (r_half, s_half) = raw.split_at_mut(width);
    write_scalar(r_half, parsed.r.as_bytes())?;
    write_scalar(s_half, parsed.s.as_bytes())?;
    Ok(raw)
}

/// Right-align `scalar` into `half`, leaving the lead bytes zero.
fn write_scalar(half: &mut [u8], scalar: &[u8]) -> Result<(), CryptoError> {
    if scalar.len() > half.len() {
        return Err(CryptoError::MalformedSignature(format!(
            "integer is {} bytes, wider than the {}-byte scalar",
            scalar.len(),
            half.len()
        )));
    }
    let offset = half.len() - scalar.len();
    half[offset..].copy_from_slice(scalar);
    Ok(())
}
