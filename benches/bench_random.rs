use std::hint::black_box;

use bn_utils::Sampler;
use criterion::{Criterion, criterion_group, criterion_main};
use num_bigint::BigInt;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn bench_full_width_os(c: &mut Criterion) {
    c.bench_function("random_full_width_os", |b| {
        let mut sampler = Sampler::os();
        b.iter(|| black_box(sampler.full_width().unwrap()));
    });
}

fn bench_full_width_chacha(c: &mut Criterion) {
    c.bench_function("random_full_width_chacha", |b| {
        let mut sampler = Sampler::new(ChaCha20Rng::seed_from_u64(42));
        b.iter(|| black_box(sampler.full_width().unwrap()));
    });
}

fn bench_bit_length_1024(c: &mut Criterion) {
    c.bench_function("random_bit_length_1024", |b| {
        let mut sampler = Sampler::new(ChaCha20Rng::seed_from_u64(42));
        b.iter(|| black_box(sampler.bit_length(black_box(1024)).unwrap()));
    });
}

fn bench_range_wide(c: &mut Criterion) {
    c.bench_function("random_range_wide", |b| {
        let mut sampler = Sampler::new(ChaCha20Rng::seed_from_u64(42));
        let from = BigInt::from(-1_000_000_000_000i64);
        let to = BigInt::from(u128::MAX);
        b.iter(|| black_box(sampler.range(black_box(&from), black_box(&to)).unwrap()));
    });
}

fn bench_hex_32(c: &mut Criterion) {
    c.bench_function("random_hex_32", |b| {
        let mut sampler = Sampler::new(ChaCha20Rng::seed_from_u64(42));
        b.iter(|| black_box(sampler.hex(black_box(32)).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_full_width_os,
    bench_full_width_chacha,
    bench_bit_length_1024,
    bench_range_wide,
    bench_hex_32,
);
criterion_main!(benches);
