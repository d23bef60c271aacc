//! Technique comparison benchmarks
//!
//! Each group runs every variant of one problem on the same input so the
//! cost of the naive and closed-form techniques can be read side by side.

use std::time::Duration;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use logic_building::domain::{combinatorics, gcd, prime, series, sqrt};

fn ci_criterion() -> Criterion {
    Criterion::default()
        .sample_size(15)
        .measurement_time(Duration::from_secs(5))
}

fn bench_gcd(c: &mut Criterion) {
    let mut group = c.benchmark_group("gcd");
    let (a, b) = (1_071u64, 462u64);

    group.bench_function("subtractive", |bench| {
        bench.iter(|| gcd::gcd_subtractive(black_box(a), black_box(b)))
    });
    group.bench_function("euclid", |bench| {
        bench.iter(|| gcd::gcd_euclid(black_box(a), black_box(b)))
    });
    group.bench_function("brute_force", |bench| {
        bench.iter(|| gcd::gcd_brute_force(black_box(a), black_box(b)))
    });

    group.finish();
}

fn bench_floor_sqrt(c: &mut Criterion) {
    let mut group = c.benchmark_group("floor_sqrt");
    let n = 1_000_000u64;

    group.bench_function("linear", |b| b.iter(|| sqrt::floor_sqrt_linear(black_box(n))));
    group.bench_function("binary_search", |b| {
        b.iter(|| sqrt::floor_sqrt_binary_search(black_box(n)))
    });
    group.bench_function("builtin", |b| b.iter(|| sqrt::floor_sqrt_builtin(black_box(n))));
    group.bench_function("exp_log", |b| b.iter(|| sqrt::floor_sqrt_exp_log(black_box(n))));

    group.finish();
}

fn bench_sum_of_naturals(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum_of_naturals");
    let n = 10_000u64;

    group.bench_function("loop", |b| b.iter(|| series::sum_of_naturals_loop(black_box(n))));
    group.bench_function("formula", |b| {
        b.iter(|| series::sum_of_naturals_formula(black_box(n)))
    });
    group.bench_function("recursive", |b| {
        b.iter(|| series::sum_of_naturals_recursive(black_box(n)))
    });

    group.finish();
}

fn bench_ncr(c: &mut Criterion) {
    let mut group = c.benchmark_group("ncr");

    group.bench_function("multiplicative", |b| {
        b.iter(|| combinatorics::ncr_multiplicative(black_box(20), black_box(10)))
    });
    group.bench_function("logarithmic", |b| {
        b.iter(|| combinatorics::ncr_logarithmic(black_box(20), black_box(10)))
    });
    group.bench_function("recursive", |b| {
        b.iter(|| combinatorics::ncr_recursive(black_box(20), black_box(10)))
    });

    group.finish();
}

fn bench_is_prime(c: &mut Criterion) {
    let mut group = c.benchmark_group("prime");

    group.bench_function("trial_division_7919", |b| {
        b.iter(|| prime::is_prime(black_box(7919)))
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = ci_criterion();
    targets = bench_gcd, bench_floor_sqrt, bench_sum_of_naturals, bench_ncr, bench_is_prime
}
criterion_main!(benches);
