//! Criterion benchmarks for the tour sequencer.
//!
//! Measures sequencing time across problem sizes to track the cost of the
//! quadratic construction and the repeated 2-opt sweeps.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package georoute-solver-tsp
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use georoute_core::{OptimizeRequest, Point, RouteMode, RouteSequencer};
use georoute_solver_tsp::TourSequencer;


use bench_support::{BENCHMARK_SEED, generate_clustered_points};

/// Problem sizes to benchmark.
const PROBLEM_SIZES: &[usize] = &[10, 25, 50, 100];

fn build_request(points: Vec<Point>, route_mode: RouteMode) -> OptimizeRequest {
    OptimizeRequest {
        points,
        start_location: Some(Point::new("start", "Hotel", 48.85, 2.35)),
        route_mode,
        ..OptimizeRequest::default()
    }
}

fn bench_sequence_times(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence_time");
    let sequencer = TourSequencer::new();

    for &size in PROBLEM_SIZES {
        for mode in [RouteMode::Loop, RouteMode::OneWay] {
            let request = build_request(generate_clustered_points(size, BENCHMARK_SEED), mode);

            #[expect(
                clippy::as_conversions,
                reason = "Safe conversion for small problem sizes"
            )]
            let throughput_size = size as u64;
            group.throughput(Throughput::Elements(throughput_size));
            group.bench_with_input(BenchmarkId::new(mode.as_str(), size), &request, |b, req| {
                b.iter(|| {
                    #[expect(
                        clippy::let_underscore_must_use,
                        reason = "Benchmarking sequencing, result is intentionally discarded"
                    )]
                    let _ = sequencer.optimize(req);
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_sequence_times);
criterion_main!(benches);
