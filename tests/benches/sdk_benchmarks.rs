//! # Meridian SDK Benchmarks
//!
//! Performance validation for the SDK hot paths:
//!
//! | Area | Operation | Target |
//! |------|-----------|--------|
//! | Hashing | digest 1 KiB | < 10μs |
//! | Signing | ECDSA sign + verify | < 1ms |
//! | Normalization | DER → raw signature | < 1μs |
//! | Canonical encoding | payload / envelope / id | < 10μs |
//! | Wire codec | transaction encode + decode | < 10μs |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use std::time::Duration;

use meridian_convert::wire::{self, TransactionMessage};
use meridian_convert::{transaction_from_message, transaction_to_message};
use meridian_crypto::{
    digest, normalize_signature, HashAlgorithm, InMemorySigner, PrivateKey, SignatureAlgorithm,
    Signer,
};
use meridian_types::{Address, ProposalKey, Transaction};

fn generate_message(size: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| rng.gen()).collect()
}

fn sample_transaction(signature_count: usize) -> Transaction {
    let mut transaction = Transaction {
        script: generate_message(256),
        arguments: vec![generate_message(64), generate_message(64)],
        reference_block_id: [0x1D; 32],
        gas_limit: 9999,
        proposal_key: ProposalKey {
            address: Address::new([0, 0, 0, 0, 0, 0, 0, 0x01]),
            key_index: 0,
            sequence_number: 42,
        },
        payer: Address::new([0, 0, 0, 0, 0, 0, 0, 0x02]),
        authorizers: vec![Address::new([0, 0, 0, 0, 0, 0, 0, 0x01])],
        payload_signatures: vec![],
        envelope_signatures: vec![],
    };
    for index in 0..signature_count {
        transaction.add_payload_signature(
            transaction.proposal_key.address,
            index as u32,
            generate_message(64),
        );
    }
    transaction
}

// ============================================================================
// Hashing Benchmarks
// ============================================================================

fn bench_hashing(c: &mut Criterion) {
    let mut group = c.benchmark_group("crypto-hashing");
    group.measurement_time(Duration::from_secs(10));

    let algorithms = [
        HashAlgorithm::Sha2_256,
        HashAlgorithm::Sha2_384,
        HashAlgorithm::Sha3_256,
        HashAlgorithm::Sha3_384,
    ];

    for algorithm in algorithms {
        let data = generate_message(1024);

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("digest_1kb", algorithm),
            &data,
            |b, data| b.iter(|| black_box(digest(algorithm, data))),
        );
    }

    group.finish();
}

// ============================================================================
// Signing and Verification Benchmarks
// ============================================================================

fn bench_signing_and_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("crypto-signing");
    group.measurement_time(Duration::from_secs(10));

    let algorithms = [
        SignatureAlgorithm::EcdsaP256,
        SignatureAlgorithm::EcdsaSecp256k1,
    ];

    for algorithm in algorithms {
        let key = PrivateKey::generate(algorithm);
        let public_key = key.public_key();
        let signer = InMemorySigner::new(key, HashAlgorithm::Sha3_256);
        let message = generate_message(256);
        let signature = signer.sign(&message).unwrap();

        group.bench_with_input(
            BenchmarkId::new("sign", algorithm),
            &message,
            |b, message| b.iter(|| black_box(signer.sign(message).unwrap())),
        );

        group.bench_with_input(
            BenchmarkId::new("verify", algorithm),
            &(message, signature),
            |b, (message, signature)| {
                b.iter(|| {
                    black_box(
                        public_key
                            .verify(message, signature, HashAlgorithm::Sha3_256)
                            .unwrap(),
                    )
                })
            },
        );
    }

    group.finish();
}

// ============================================================================
// Signature Normalization Benchmarks
// ============================================================================

fn bench_signature_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("crypto-normalization");
    group.measurement_time(Duration::from_secs(10));

    let key = PrivateKey::generate(SignatureAlgorithm::EcdsaP256);

    let der = key
        .sign_prehash_der(&digest(HashAlgorithm::Sha2_256, b"single"))
        .unwrap();
    group.bench_function("normalize_single", |b| {
        b.iter(|| {
            black_box(normalize_signature(&der, SignatureAlgorithm::EcdsaP256).unwrap())
        })
    });

    let batch_sizes = [10, 100, 1000];
    for size in batch_sizes {
        let signatures: Vec<Vec<u8>> = (0..size)
            .map(|i| {
                let prehash = digest(HashAlgorithm::Sha2_256, &[i as u8]);
                key.sign_prehash_der(&prehash).unwrap()
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::new("normalize_batch", size),
            &signatures,
            |b, signatures| {
                b.iter(|| {
                    let mut normalized = 0usize;
                    for der in signatures {
                        if normalize_signature(der, SignatureAlgorithm::EcdsaP256).is_ok() {
                            normalized += 1;
                        }
                    }
                    black_box(normalized)
                })
            },
        );
    }

    group.finish();
}

// ============================================================================
// Canonical Encoding Benchmarks
// ============================================================================

fn bench_canonical_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("types-canonical-encoding");
    group.measurement_time(Duration::from_secs(10));

    let signature_counts = [0, 1, 5];
    for count in signature_counts {
        let transaction = sample_transaction(count);

        group.bench_with_input(
            BenchmarkId::new("payload_form", count),
            &transaction,
            |b, tx| b.iter(|| black_box(tx.payload_canonical_form())),
        );
        group.bench_with_input(
            BenchmarkId::new("envelope_form", count),
            &transaction,
            |b, tx| b.iter(|| black_box(tx.envelope_canonical_form())),
        );
        group.bench_with_input(BenchmarkId::new("id", count), &transaction, |b, tx| {
            b.iter(|| black_box(tx.id()))
        });
    }

    group.finish();
}

// ============================================================================
// Wire Codec Benchmarks
// ============================================================================

fn bench_wire_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert-wire-codec");
    group.measurement_time(Duration::from_secs(10));

    let transaction = sample_transaction(2);
    let message = transaction_to_message(&transaction);
    let encoded = wire::to_bytes(&message).unwrap();

    group.throughput(Throughput::Bytes(encoded.len() as u64));
    group.bench_function("transaction_encode", |b| {
        b.iter(|| black_box(wire::to_bytes(&message).unwrap()))
    });
    group.bench_function("transaction_decode", |b| {
        b.iter(|| {
            let message: TransactionMessage = wire::from_bytes(&encoded).unwrap();
            black_box(transaction_from_message(Some(&message)).unwrap())
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_hashing,
    bench_signing_and_verification,
    bench_signature_normalization,
    bench_canonical_encoding,
    bench_wire_codec,
);

criterion_main!(benches);
