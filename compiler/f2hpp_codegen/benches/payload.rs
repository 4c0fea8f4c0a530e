//! Payload emission benchmarks.
//!
//! Measures how fast input bytes are turned into array initializer text:
//! - small inputs that fit on a handful of lines
//! - a 1 MiB input that exercises line wrapping throughout
//!
//! Run with: `cargo bench --bench payload`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use f2hpp_codegen::{payload::write_array_definition, GenerateOptions};

/// Build `len` bytes of non-repeating-looking input
fn sample(len: usize) -> Vec<u8> {
    (0..len)
        .map(|i| u8::try_from(i.wrapping_mul(31) % 251).unwrap_or_default())
        .collect()
}

/// Benchmark a 256 byte input
fn bench_payload_small(c: &mut Criterion) {
    let input = sample(256);
    let options = GenerateOptions::default();
    c.bench_function("payload_small", |b| {
        b.iter(|| {
            let mut out = Vec::new();
            write_array_definition("bench", black_box(&input[..]), &mut out, &options)
                .expect("in-memory io should succeed");
            out
        });
    });
}

/// Benchmark a 1 MiB input
fn bench_payload_large(c: &mut Criterion) {
    let input = sample(1024 * 1024);
    let options = GenerateOptions::default();
    c.bench_function("payload_large", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(input.len() * 6);
            write_array_definition("bench", black_box(&input[..]), &mut out, &options)
                .expect("in-memory io should succeed");
            out
        });
    });
}

criterion_group!(payload, bench_payload_small, bench_payload_large);
criterion_main!(payload);
