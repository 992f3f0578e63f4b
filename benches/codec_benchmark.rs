// ============================================================================
// Roman Codec Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Encode - integer to numeral at short, long and maximal lengths
// 2. Validate/Decode - numeral to integer
// 3. Numeral Value - in-place arithmetic keeping both views in sync
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use roman_numerals::prelude::*;
use std::hint::black_box;

fn benchmark_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for number in [4i64, 1994, 3888].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(number), number, |b, &number| {
            b.iter(|| black_box(encode(black_box(number))));
        });
    }

    group.finish();
}

fn benchmark_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for roman in ["IV", "MCMXCIV", "MMMDCCCLXXXVIII"].iter() {
        group.bench_with_input(BenchmarkId::new("validate", roman), roman, |b, roman| {
            b.iter(|| black_box(is_valid_roman(black_box(roman))));
        });
        group.bench_with_input(BenchmarkId::new("decode", roman), roman, |b, roman| {
            b.iter(|| black_box(decode(black_box(roman))));
        });
    }

    group.finish();
}

fn benchmark_full_range_round_trip(c: &mut Criterion) {
    c.bench_function("round_trip_1_to_max", |b| {
        let max = get_max_parsable_number();
        b.iter(|| {
            for number in 1..=max {
                let roman = encode(number).unwrap();
                black_box(decode(&roman).unwrap());
            }
        });
    });
}

fn benchmark_numeral_value(c: &mut Criterion) {
    c.bench_function("numeral_value_plus_minus", |b| {
        let mut value = NumeralValue::new(1000).unwrap();
        b.iter(|| {
            value.plus(black_box("CMXCIX")).unwrap();
            value.minus(black_box(999)).unwrap();
        });
    });
}

criterion_group!(
    benches,
    benchmark_encode,
    benchmark_decode,
    benchmark_full_range_round_trip,
    benchmark_numeral_value,
);
criterion_main!(benches);
