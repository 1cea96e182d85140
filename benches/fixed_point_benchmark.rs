// ============================================================================
// Fixed-Point Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Widths - Wrapping multiply/divide per storage width
// 2. Checked vs Wrapping - Cost of the opt-in checked layer
// 3. Accumulation - Dot products over slices of values
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fixedpt::prelude::*;
use std::hint::black_box;

// ============================================================================
// Per-Width Arithmetic
// ============================================================================

fn bench_width<T: FixedNum>(c: &mut Criterion, label: &str) {
    let mut group = c.benchmark_group(format!("arithmetic_{}", label));
    let a = T::PI;
    let b = T::E;

    group.bench_function("mul", |bench| {
        bench.iter(|| black_box(black_box(a) * black_box(b)))
    });
    group.bench_function("div", |bench| {
        bench.iter(|| black_box(black_box(a) / black_box(b)))
    });
    group.bench_function("add", |bench| {
        bench.iter(|| black_box(black_box(a) + black_box(b)))
    });

    group.finish();
}

fn benchmark_widths(c: &mut Criterion) {
    bench_width::<FixedI16<8>>(c, "i16");
    bench_width::<FixedI32<16>>(c, "i32");
    bench_width::<FixedI64<32>>(c, "i64");
}

// ============================================================================
// Checked vs Wrapping
// ============================================================================

fn benchmark_checked_vs_wrapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("checked_vs_wrapping");
    let a = Fixed::HALF_PI;
    let b = Fixed::ONE_POINT_FIVE;

    group.bench_function("wrapping_mul", |bench| {
        bench.iter(|| black_box(black_box(a) * black_box(b)))
    });
    group.bench_function("checked_mul", |bench| {
        bench.iter(|| black_box(black_box(a).checked_mul(black_box(b))))
    });
    group.bench_function("saturating_mul", |bench| {
        bench.iter(|| black_box(black_box(a).saturating_mul(black_box(b))))
    });
    group.bench_function("wrapping_div", |bench| {
        bench.iter(|| black_box(black_box(a) / black_box(b)))
    });
    group.bench_function("checked_div", |bench| {
        bench.iter(|| black_box(black_box(a).checked_div(black_box(b))))
    });

    group.finish();
}

// ============================================================================
// Accumulation
// ============================================================================

fn benchmark_dot_product(c: &mut Criterion) {
    let mut group = c.benchmark_group("dot_product");

    for len in [16usize, 256, 4096].iter() {
        let xs: Vec<Q24_8> = (0..*len)
            .map(|i| Q24_8::from_raw((i as i32 % 512) - 256))
            .collect();
        let ys: Vec<Q24_8> = xs.iter().rev().copied().collect();

        group.bench_with_input(BenchmarkId::from_parameter(len), len, |bench, _| {
            bench.iter(|| {
                let dot: Q24_8 = xs.iter().zip(&ys).map(|(&x, &y)| x * y).sum();
                black_box(dot)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_widths,
    benchmark_checked_vs_wrapping,
    benchmark_dot_product,
);
criterion_main!(benches);
