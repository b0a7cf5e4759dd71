//! Minimal benchmarking for mask operations.

use std::time::Instant;

/// Statistics from a benchmark run. All fields are durations in milliseconds.
#[derive(Debug, Default)]
pub struct BenchStats {
    pub max: f32,
    pub mean: f32,
    pub median: f32,
    pub min: f32,
}

/// Run `f` for `trials` iterations and print a summary of the timings,
/// prefixed by `description` if given.
///
/// Benchmarks are written as `#[ignore]`d tests, and run with
/// `cargo test --release -- --ignored --nocapture bench_`.
pub fn run_bench<F: FnMut()>(trials: usize, description: Option<&str>, mut f: F) -> BenchStats {
    if trials == 0 {
        return BenchStats::default();
    }

    let mut times: Vec<f32> = (0..trials)
        .map(|_| {
            let start = Instant::now();
            f();
            (start.elapsed().as_secs_f64() * 1000.0) as f32
        })
        .collect();
    times.sort_by(|a, b| a.total_cmp(b));

    let mid = times.len() / 2;
    let median = if times.len() % 2 == 1 {
        times[mid]
    } else {
        (times[mid - 1] + times[mid]) / 2.
    };
    let stats = BenchStats {
        max: times[times.len() - 1],
        mean: times.iter().sum::<f32>() / times.len() as f32,
        median,
        min: times[0],
    };

    println!(
        "{}mean {:.3}ms median {:.3} min {:.3} max {:.3}",
        description.map(|d| format!("{}. ", d)).unwrap_or_default(),
        stats.mean,
        stats.median,
        stats.min,
        stats.max
    );

    stats
}
