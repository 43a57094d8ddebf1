//! Ascon Criterion Benchmark
//!
//! Throughput of the AEAD entry points across payload sizes and variants,
//! plus the raw permutation as a lower-bound reference.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use ascon::Variant;
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;

const KB: usize = 1024;

fn key_for(variant: Variant) -> Vec<u8> {
    vec![0x42u8; variant.key_len()]
}

// =============================================================================
// BENCHMARK 1: ENCRYPT
// =============================================================================

fn bench_encrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Encrypt");

    let sizes = [(64, "64B"), (256, "256B"), (KB, "1KB"), (16 * KB, "16KB")];
    let variants = [
        (Variant::Ascon128, "128"),
        (Variant::Ascon128a, "128a"),
        (Variant::Ascon80pq, "80pq"),
    ];

    for (variant, vname) in variants {
        let key = key_for(variant);
        let nonce = [9u8; 16];
        for (size, sname) in sizes {
            let mut plaintext = vec![0u8; size];
            rand::rng().fill(&mut plaintext[..]);
            group.throughput(Throughput::Bytes(size as u64));

            group.bench_with_input(
                criterion::BenchmarkId::new(vname, sname),
                &plaintext,
                |b, data| {
                    b.iter(|| ascon::encrypt(&key, &nonce, b"", black_box(data), variant));
                },
            );
        }
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: DECRYPT
// =============================================================================

fn bench_decrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Decrypt");

    let variant = Variant::Ascon128a;
    let key = key_for(variant);
    let nonce = [9u8; 16];

    for (size, name) in [(256, "256B"), (KB, "1KB"), (16 * KB, "16KB")] {
        let mut plaintext = vec![0u8; size];
        rand::rng().fill(&mut plaintext[..]);
        let sealed = ascon::encrypt(&key, &nonce, b"", &plaintext, variant);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &sealed,
            |b, data| {
                b.iter(|| ascon::decrypt(&key, &nonce, b"", black_box(data), variant).unwrap());
            },
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: RAW PERMUTATION
// =============================================================================

fn bench_permutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Permutation");

    for rounds in [6usize, 8, 12] {
        group.bench_function(format!("p{rounds}"), |b| {
            let mut state = [1u64, 2, 3, 4, 5];
            b.iter(|| {
                ascon::permutation::permute(black_box(&mut state), rounds);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encrypt, bench_decrypt, bench_permutation);
criterion_main!(benches);
