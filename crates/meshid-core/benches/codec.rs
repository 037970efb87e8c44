//! Benchmarks for the hot codec paths: location folding and identifier
//! encode/decode.
//!
//! Run with: cargo bench --bench codec

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use meshid_core::{decode, encode, DhtLocation, IdKind};

fn bench_location(c: &mut Criterion) {
    let mut group = c.benchmark_group("location");
    for size in [32usize, 256, 4096] {
        let payload = vec![0x5au8; size];
        group.bench_with_input(BenchmarkId::from_parameter(size), &payload, |b, payload| {
            b.iter(|| DhtLocation::compute(black_box(payload)));
        });
    }
    group.finish();
}

fn bench_identifier(c: &mut Criterion) {
    let pubkey = [0xa1u8; 32];
    c.bench_function("encode_agent", |b| {
        b.iter(|| encode(IdKind::Agent, black_box(&pubkey)));
    });

    let text = encode(IdKind::Agent, &pubkey);
    c.bench_function("decode_agent", |b| {
        b.iter(|| decode(black_box(&text)));
    });
}

criterion_group!(benches, bench_location, bench_identifier);
criterion_main!(benches);
