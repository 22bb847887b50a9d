//! Benchmarks for schedule generation and IRR solving.

use criterion::{criterion_group, criterion_main, Criterion};
use fincalc_analytics::prelude::*;
use fincalc_core::PaymentTiming;
use std::hint::black_box;

fn bench_schedules(c: &mut Criterion) {
    c.bench_function("level_payment_360_periods", |b| {
        b.iter(|| {
            level_payment_schedule(
                black_box(250_000.0),
                black_box(4.5),
                black_box(360),
                PaymentTiming::End,
            )
        });
    });

    c.bench_function("equal_principal_360_periods", |b| {
        b.iter(|| {
            equal_principal_schedule(
                black_box(250_000.0),
                black_box(4.5),
                black_box(360),
                PaymentTiming::End,
            )
        });
    });

    c.bench_function("summarize_360_periods", |b| {
        let schedule = level_payment_schedule(250_000.0, 4.5, 360, PaymentTiming::End);
        b.iter(|| summarize(black_box(&schedule)));
    });
}

fn bench_solvers(c: &mut Criterion) {
    c.bench_function("irr_20_flows", |b| {
        let mut flows = vec![-10_000.0];
        flows.extend((0..20).map(|i| 600.0 + f64::from(i) * 10.0));
        b.iter(|| internal_rate_of_return(black_box(&flows)));
    });

    c.bench_function("implied_rate", |b| {
        b.iter(|| {
            implied_rate(
                black_box(1000.0),
                black_box(1628.89),
                black_box(10.0),
                black_box(0.0),
                PaymentTiming::End,
            )
        });
    });
}

criterion_group!(benches, bench_schedules, bench_solvers);
criterion_main!(benches);
