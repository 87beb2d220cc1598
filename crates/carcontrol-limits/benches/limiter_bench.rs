//! Benchmarks for the safety-limiting hot paths.

use carcontrol_limits::{DriverAwareLimiter, SteerLimits, SteerRateLimiter, limit_curvature};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_limit_curvature(c: &mut Criterion) {
    c.bench_function("limit_curvature_highway", |b| {
        b.iter(|| {
            limit_curvature(
                black_box(27.0),
                black_box(0.0012),
                black_box(0.02),
                black_box(0.0035),
            )
        })
    });

    c.bench_function("limit_curvature_standstill", |b| {
        b.iter(|| {
            limit_curvature(
                black_box(0.05),
                black_box(0.0),
                black_box(0.02),
                black_box(0.01),
            )
        })
    });
}

fn bench_rate_limiter(c: &mut Criterion) {
    let limits = SteerLimits::default();
    let limiter = DriverAwareLimiter;

    c.bench_function("driver_aware_limiter", |b| {
        b.iter(|| {
            limiter.apply(
                black_box(250),
                black_box(180),
                black_box(-35.0),
                black_box(&limits),
            )
        })
    });
}

criterion_group!(benches, bench_limit_curvature, bench_rate_limiter);
criterion_main!(benches);
