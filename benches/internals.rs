use std::path::PathBuf;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use satbench::display;
use satbench::types::{AttemptRecord, Outcome};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Deterministic pseudo-random durations in seconds.
fn synthetic_durations(size: usize) -> Vec<f64> {
    (0..size)
        .map(|i| ((i as u64).wrapping_mul(2654435761) % 20_000) as f64 / 1000.0)
        .collect()
}

fn synthetic_records(size: usize) -> Vec<AttemptRecord> {
    (0..size)
        .map(|i| {
            let outcome = match i % 4 {
                0 | 1 => Outcome::Success(Duration::from_millis((i as u64 * 37) % 20_000)),
                2 => Outcome::Timeout,
                _ => Outcome::AbnormalExit(Some(1)),
            };
            AttemptRecord {
                file_name: format!("instance-{i:05}.cnf"),
                path: PathBuf::from(format!("instances/instance-{i:05}.cnf")),
                outcome,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_sort_durations(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_durations");
    for size in [100usize, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let durations = synthetic_durations(size);
            b.iter(|| {
                let mut values = durations.clone();
                values.sort_by(f64::total_cmp);
                values
            });
        });
    }
    group.finish();
}

fn bench_format_summary(c: &mut Criterion) {
    let records = synthetic_records(1000);
    c.bench_function("format_summary_1000", |b| {
        b.iter(|| display::format_summary(&records));
    });
}

fn bench_format_json(c: &mut Criterion) {
    let records = synthetic_records(1000);
    c.bench_function("format_json_1000", |b| {
        b.iter(|| display::format_json(&records));
    });
}

criterion_group!(
    benches,
    bench_sort_durations,
    bench_format_summary,
    bench_format_json
);
criterion_main!(benches);
