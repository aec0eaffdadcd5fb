// ============================================================================
// Conversion Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Construction - full validation of Arabic and Elbonian input
// 2. Queries - to_arabic and to_elbonian on validated values
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use elbonian_numerals::prelude::*;

// ============================================================================
// Construction Benchmarks
// Validation dominates; longest inputs are the worst case
// ============================================================================

fn benchmark_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for input in ["0", "9999", "-9999", "Z", "MMCCII", "NNNDDDLLLVVV", "-NNNDDDLLLVVV"] {
        group.bench_with_input(BenchmarkId::new("new", input), &input, |b, input| {
            b.iter(|| black_box(Converter::new(input)));
        });
    }

    group.bench_function("rejection/malformed", |b| {
        b.iter(|| black_box(Converter::new("NMDDCLLXVVVI")));
    });
    group.bench_function("rejection/out_of_bounds", |b| {
        b.iter(|| black_box(Converter::new("10000")));
    });

    group.finish();
}

// ============================================================================
// Query Benchmarks
// ============================================================================

fn benchmark_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");

    let arabic = Converter::new("9999").unwrap();
    let elbonian = Converter::new("-NNNDDDLLLVVV").unwrap();

    group.bench_function("to_elbonian", |b| {
        b.iter(|| black_box(arabic.to_elbonian()));
    });
    group.bench_function("to_arabic", |b| {
        b.iter(|| black_box(elbonian.to_arabic()));
    });

    group.finish();
}

criterion_group!(benches, benchmark_construction, benchmark_queries);
criterion_main!(benches);
