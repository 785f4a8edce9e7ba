//! Criterion benchmarks for [`Point`] classification and formatting.
//!
//! Run with:
//! ```bash
//! cargo bench --package point-core --bench quadrant_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use point_core::Point;

// ── Fixtures ──────────────────────────────────────────────────────────────────

/// One representative point per classification outcome.
fn sample_points() -> [(&'static str, Point); 5] {
    [
        ("origin", Point::new(0, 0)),
        ("first", Point::new(3, 4)),
        ("second", Point::new(-3, 4)),
        ("third", Point::new(-3, -4)),
        ("fourth", Point::new(2, -1)),
    ]
}

// ── Benchmarks: quadrant ──────────────────────────────────────────────────────

/// Benchmarks [`Point::quadrant`] for each outcome of the classification rule.
fn bench_quadrant(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadrant");

    for (name, point) in sample_points() {
        group.bench_with_input(BenchmarkId::new("classify", name), &point, |b, p| {
            b.iter(|| black_box(p).quadrant())
        });
    }

    group.finish();
}

// ── Benchmarks: text ──────────────────────────────────────────────────────────

/// Benchmarks building the canonical text and the classification message.
fn bench_format(c: &mut Criterion) {
    let point = Point::new(2, -1);
    let mut group = c.benchmark_group("format");

    group.bench_function("display", |b| b.iter(|| black_box(&point).to_string()));

    group.bench_function("classification_message", |b| {
        b.iter(|| {
            let p = black_box(&point);
            format!("{p} is in quadrant: {}", p.quadrant())
        })
    });

    group.finish();
}

/// Benchmarks parsing both accepted textual forms.
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("canonical", |b| {
        b.iter(|| black_box("Point[x=2,y=-1]").parse::<Point>())
    });

    group.bench_function("short", |b| b.iter(|| black_box("2,-1").parse::<Point>()));

    group.finish();
}

criterion_group!(benches, bench_quadrant, bench_format, bench_parse);
criterion_main!(benches);
