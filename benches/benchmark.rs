//! Taper generation benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - 1D constructors across mask lengths (1K to 1M samples)
//! - Taper profiles (hanning, cosine, cosine-square, none)
//! - 2D and 3D mask assembly across realistic panel sizes
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use taper_rs::prelude::*;

// ============================================================================
// 1D Constructors
// ============================================================================

fn bench_taper1d_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("taper1d_scaling");

    for &nmask in &[1_000usize, 10_000, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements(nmask as u64));

        group.bench_with_input(BenchmarkId::new("hanning", nmask), &nmask, |b, &n| {
            b.iter(|| hanning_taper::<f64>(black_box(n), black_box(n / 10)).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("cosine", nmask), &nmask, |b, &n| {
            b.iter(|| cosine_taper::<f64>(black_box(n), false))
        });
    }

    group.finish();
}

fn bench_taper1d_profiles(c: &mut Criterion) {
    let mut group = c.benchmark_group("taper1d_profiles");
    let nmask = 100_000;
    let ntap = 10_000;

    for (name, taper_type) in [
        ("hanning", Hanning),
        ("cosine", Cosine),
        ("cosinesquare", CosineSquare),
        ("none", NoTaper),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| taper1d::<f64>(black_box(nmask), black_box(ntap), taper_type).unwrap())
        });
    }

    group.finish();
}

// ============================================================================
// 2D and 3D Assembly
// ============================================================================

fn bench_taper2d(c: &mut Criterion) {
    let mut group = c.benchmark_group("taper2d");

    // (nt, nmask) shaped like typical seismic panels
    for &(nt, nmask) in &[(500usize, 200usize), (2_000, 500), (4_000, 1_000)] {
        group.throughput(Throughput::Elements((nt * nmask) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", nmask, nt)),
            &(nt, nmask),
            |b, &(nt, nmask)| {
                b.iter(|| {
                    taper2d::<f64>(
                        black_box(nt),
                        black_box(nmask),
                        black_box(nmask / 10),
                        Hanning,
                        None,
                    )
                    .unwrap()
                })
            },
        );
    }

    group.finish();
}

fn bench_taper3d(c: &mut Criterion) {
    let mut group = c.benchmark_group("taper3d");

    for &(nt, ny, nx) in &[(200usize, 50usize, 50usize), (500, 100, 100), (1_000, 200, 200)] {
        group.throughput(Throughput::Elements((nt * ny * nx) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}x{}", ny, nx, nt)),
            &(nt, ny, nx),
            |b, &(nt, ny, nx)| {
                b.iter(|| {
                    taper3d::<f64>(
                        black_box(nt),
                        black_box((ny, nx)),
                        black_box((ny / 10, nx / 10)),
                        Hanning,
                        None,
                    )
                    .unwrap()
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_taper1d_scaling,
    bench_taper1d_profiles,
    bench_taper2d,
    bench_taper3d
);
criterion_main!(benches);
