//! STL decomposition benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (1K to 50K points)
//! - Decomposition parameters (seasonal width, iterations)
//! - Variants (robust, periodic, global trends)
//! - Real-world scenarios (hourly load, monthly retail)
//! - The LOESS smoother on its own
//!
//! For parallel cycle-subseries smoothing, use `cargo bench --features parallel`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::f64::consts::PI;
use std::hint::black_box;
use stl_loess::internals::algorithms::smoother::WindowedSmoother;
use stl_loess::prelude::*;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate a linear trend plus a sinusoidal season and Gaussian noise.
fn generate_seasonal_data(size: usize, period: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.5).unwrap();

    (0..size)
        .map(|i| {
            let t = i as f64;
            10.0 + 0.01 * t
                + 3.0 * (2.0 * PI * t / period as f64).sin()
                + noise_dist.sample(&mut rng)
        })
        .collect()
}

/// Generate seasonal data where 5% of points are extreme.
fn generate_outlier_data(size: usize, period: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let outlier_dist = Uniform::new(-20.0, 20.0).unwrap();
    let mut y = generate_seasonal_data(size, period, seed);

    let n_outliers = size / 20;
    for _ in 0..n_outliers {
        let idx = rng.random_range(0..size);
        y[idx] += outlier_dist.sample(&mut rng);
    }
    y
}

/// Generate hourly electricity load (daily and weekly cycles, slow drift).
fn generate_load_data(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 2.0).unwrap();

    (0..size)
        .map(|i| {
            let t = i as f64;
            let daily = 15.0 * (2.0 * PI * t / 24.0 - PI / 2.0).sin();
            let weekly = 5.0 * (2.0 * PI * t / 168.0).cos();
            let drift = 100.0 + 0.002 * t;
            drift + daily + weekly + noise_dist.sample(&mut rng)
        })
        .collect()
}

/// Generate monthly retail sales (multiplicative-looking December peak).
fn generate_retail_data(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 1.0).unwrap();
    let month_effect = [
        -4.0, -6.0, -1.0, 0.0, 1.0, 0.5, 0.0, 1.0, -0.5, 1.5, 4.0, 12.0,
    ];

    (0..size)
        .map(|i| 50.0 + 0.2 * i as f64 + month_effect[i % 12] + noise_dist.sample(&mut rng))
        .collect()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(50);

    for size in [1_000, 10_000, 50_000] {
        group.throughput(Throughput::Elements(size as u64));

        let y = generate_seasonal_data(size, 12, 42);
        let stl = Stl::new().period(12).seasonal_width(7).build().unwrap();

        group.bench_with_input(BenchmarkId::new("decompose", size), &size, |b, _| {
            b.iter(|| stl.decompose(black_box(&y)).unwrap())
        });
    }
    group.finish();
}

fn bench_seasonal_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("seasonal_width");
    group.sample_size(100);

    let y = generate_seasonal_data(10_000, 12, 42);

    for width in [7, 15, 35, 101] {
        let stl = Stl::new().period(12).seasonal_width(width).build().unwrap();
        group.bench_with_input(BenchmarkId::new("decompose", width), &width, |b, _| {
            b.iter(|| stl.decompose(black_box(&y)).unwrap())
        });
    }
    group.finish();
}

fn bench_iterations(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterations");
    group.sample_size(50);

    let y = generate_outlier_data(10_000, 12, 42);

    for robust in [0, 1, 5, 15] {
        let stl = Stl::new()
            .period(12)
            .seasonal_width(7)
            .inner_iterations(1)
            .robust_iterations(robust)
            .build()
            .unwrap();
        group.bench_with_input(BenchmarkId::new("robust", robust), &robust, |b, _| {
            b.iter(|| stl.decompose(black_box(&y)).unwrap())
        });
    }
    group.finish();
}

fn bench_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("variants");
    group.sample_size(50);

    let y = generate_outlier_data(10_000, 12, 7);

    let robust = Stl::new().period(12).seasonal_width(7).robust().build().unwrap();
    group.bench_function("robust", |b| {
        b.iter(|| robust.decompose(black_box(&y)).unwrap())
    });

    let periodic = Stl::new().period(12).periodic().build().unwrap();
    group.bench_function("periodic", |b| {
        b.iter(|| periodic.decompose(black_box(&y)).unwrap())
    });

    let flat = Stl::new()
        .period(12)
        .seasonal_width(7)
        .flat_trend()
        .build()
        .unwrap();
    group.bench_function("flat_trend", |b| {
        b.iter(|| flat.decompose(black_box(&y)).unwrap())
    });

    let linear = Stl::new()
        .period(12)
        .seasonal_width(7)
        .linear_trend()
        .build()
        .unwrap();
    group.bench_function("linear_trend", |b| {
        b.iter(|| linear.decompose(black_box(&y)).unwrap())
    });

    group.bench_function("periodic_decomposition", |b| {
        b.iter(|| periodic_decomposition(black_box(&y), 12).unwrap())
    });

    group.finish();
}

fn bench_hourly_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("hourly_load");
    group.sample_size(50);

    for weeks in [4, 26, 52] {
        let size = weeks * 168;
        let y = generate_load_data(size, 42);
        let stl = Stl::new()
            .period(24)
            .seasonal_width(13)
            .robust()
            .build()
            .unwrap();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("daily_cycle", size), &size, |b, _| {
            b.iter(|| stl.decompose(black_box(&y)).unwrap())
        });
    }
    group.finish();
}

fn bench_monthly_retail(c: &mut Criterion) {
    let mut group = c.benchmark_group("monthly_retail");
    group.sample_size(100);

    for years in [5, 20, 100] {
        let size = years * 12;
        let y = generate_retail_data(size, 42);

        group.bench_with_input(BenchmarkId::new("robust_periodic", size), &size, |b, _| {
            b.iter(|| robust_periodic_decomposition(black_box(&y), 12).unwrap())
        });
    }
    group.finish();
}

fn bench_smoother(c: &mut Criterion) {
    let mut group = c.benchmark_group("loess_smoother");
    group.sample_size(100);

    let y = generate_seasonal_data(10_000, 50, 42);

    for (width, jump) in [(15, 1), (15, 3), (101, 1), (101, 11)] {
        let config = LoessConfig::new(width, 1, Some(jump)).unwrap();
        let id = format!("w{}_j{}", width, jump);
        group.bench_function(id, |b| {
            b.iter(|| WindowedSmoother::new(black_box(&y), &config, None).smooth())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_seasonal_width,
    bench_iterations,
    bench_variants,
    bench_hourly_load,
    bench_monthly_retail,
    bench_smoother,
);

criterion_main!(benches);
