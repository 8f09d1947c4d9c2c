//! Benchmarks for DIMENSA unit algebra

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dimensa_catalog::si;
use dimensa_core::{inv, mul, per, pow, ExactRational};

fn bench_rational_add(c: &mut Criterion) {
    let a = ExactRational::over(7, 12);
    let b = ExactRational::over(-5, 18);

    c.bench_function("rational_add", |bch| bch.iter(|| black_box(a) + black_box(b)));
}

fn bench_unit_mul(c: &mut Criterion) {
    let newton = si::newton();
    let meter = si::meter();

    c.bench_function("unit_mul", |b| {
        b.iter(|| mul(black_box(&newton), black_box(&meter)))
    });
}

fn bench_unit_per_inv(c: &mut Criterion) {
    let joule = si::joule();
    let second = si::second();

    c.bench_function("unit_per", |b| {
        b.iter(|| per(black_box(&joule), black_box(&second)))
    });
    c.bench_function("unit_inv", |b| b.iter(|| inv(black_box(&joule))));
}

fn bench_unit_fractional_pow(c: &mut Criterion) {
    let ohm = si::ohm();
    let half = ExactRational::over(1, 2);

    c.bench_function("unit_pow_half", |b| {
        b.iter(|| pow(black_box(&ohm), black_box(half)))
    });
}

criterion_group!(
    benches,
    bench_rational_add,
    bench_unit_mul,
    bench_unit_per_inv,
    bench_unit_fractional_pow
);
criterion_main!(benches);
