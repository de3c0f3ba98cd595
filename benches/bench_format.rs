use std::hint::black_box;

use bn_utils::{Unit, format_amount, format_units, parse_amount, parse_units, sum, to_percent};
use criterion::{Criterion, criterion_group, criterion_main};
use num_bigint::BigInt;

fn bench_format_amount_wei(c: &mut Criterion) {
    c.bench_function("format_amount_wei", |b| {
        let amount = BigInt::from(7_890_000);
        b.iter(|| black_box(format_amount(black_box(&amount), None).unwrap()));
    });
}

fn bench_format_amount_ether(c: &mut Criterion) {
    c.bench_function("format_amount_ether", |b| {
        let amount = parse_units("12345678.9", Unit::Ether).unwrap();
        b.iter(|| black_box(format_amount(black_box(&amount), None).unwrap()));
    });
}

fn bench_parse_amount_hex(c: &mut Criterion) {
    c.bench_function("parse_amount_hex", |b| {
        b.iter(|| black_box(parse_amount(black_box("0xde0b6b3a7640000")).unwrap()));
    });
}

fn bench_units_roundtrip(c: &mut Criterion) {
    c.bench_function("units_roundtrip", |b| {
        b.iter(|| {
            let wei = parse_units(black_box("123456.789"), Unit::Ether).unwrap();
            black_box(format_units(&wei, Unit::Ether))
        });
    });
}

fn bench_sum(c: &mut Criterion) {
    c.bench_function("sum_1000_values", |b| {
        let values: Vec<BigInt> = (0..1000u64)
            .map(|i| BigInt::from(i) * BigInt::from(10u8).pow(18))
            .collect();
        b.iter(|| black_box(sum(black_box(&values))));
    });
}

fn bench_to_percent(c: &mut Criterion) {
    c.bench_function("to_percent", |b| {
        let a = BigInt::from(2);
        let total = BigInt::from(3);
        b.iter(|| black_box(to_percent(black_box(&a), black_box(&total)).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_format_amount_wei,
    bench_format_amount_ether,
    bench_parse_amount_hex,
    bench_units_roundtrip,
    bench_sum,
    bench_to_percent,
);
criterion_main!(benches);
