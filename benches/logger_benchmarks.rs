//! Criterion benchmarks for rust_structured_logger

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_structured_logger::prelude::*;

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("new", |b| {
        b.iter(|| black_box(Logger::new("bench")));
    });

    group.bench_function("builder_with_timezone", |b| {
        b.iter(|| {
            let logger = Logger::builder("bench")
                .output(NoopOutput::default())
                .timezone(black_box("Europe/Budapest"))
                .build()
                .unwrap();
            black_box(logger)
        });
    });

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("logging");
    group.throughput(Throughput::Elements(1));

    let mut logger = Logger::builder("bench")
        .output(NoopOutput::new(Severity::Debug))
        .static_field("service", "bench")
        .build()
        .unwrap();

    group.bench_function("info_plain", |b| {
        b.iter(|| logger.info(black_box("Info message")).unwrap());
    });

    group.bench_function("info_by_name", |b| {
        b.iter(|| logger.log(black_box("INFO"), black_box("Info message")).unwrap());
    });

    group.bench_function("with_dynamic_fields", |b| {
        b.iter(|| {
            logger
                .add_string("request", "r-1")
                .add_integer("status", 200)
                .add_float("elapsed", 0.42)
                .info(black_box("request served"))
                .unwrap()
        });
    });

    let mut filtered = Logger::builder("bench")
        .output(NoopOutput::new(Severity::Error))
        .build()
        .unwrap();

    group.bench_function("below_threshold", |b| {
        b.iter(|| filtered.debug(black_box("Filtered message")).unwrap());
    });

    group.finish();
}

// ============================================================================
// Rendering Benchmarks
// ============================================================================

fn bench_render_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_line");
    let now = Utc::now();

    for field_count in [0usize, 5, 20] {
        let dynamic: Fields = (0..field_count)
            .map(|i| (format!("field_{}", i), FieldValue::from(format!("{}", i * 7))))
            .collect();

        for (label, numeric_check) in [("numeric_check", true), ("raw", false)] {
            let mut logger = Logger::new("bench");
            logger.set_numeric_check(numeric_check);
            group.throughput(Throughput::Elements(1));
            group.bench_with_input(BenchmarkId::new(label, field_count), &dynamic, |b, dynamic| {
                b.iter(|| {
                    logger
                        .render_line(Severity::Info, "render", &Fields::new(), dynamic, now)
                        .unwrap()
                });
            });
        }
    }

    let mut iso = Logger::new("bench");
    iso.set_time_format_iso8601();
    group.bench_function("iso8601_timestamp", |b| {
        b.iter(|| {
            iso.render_line(Severity::Info, "render", &Fields::new(), &Fields::new(), now)
                .unwrap()
        });
    });

    group.finish();
}

// ============================================================================
// Interpolation Benchmarks
// ============================================================================

fn bench_interpolation(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpolation");

    let interpolator = Interpolator::with_default_context(Fields::new().with("service", "api"));
    let context = Fields::new()
        .with("user", "ada")
        .with("count", 42)
        .with("path", "/v1/orders");

    group.bench_function("no_placeholders", |b| {
        b.iter(|| interpolator.interpolate(black_box("plain message without braces"), &context));
    });

    group.bench_function("three_placeholders", |b| {
        b.iter(|| {
            interpolator.interpolate(
                black_box("{service}: {user} fetched {count} items from {path}"),
                &context,
            )
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_logger_creation,
    bench_logging,
    bench_render_line,
    bench_interpolation
);
criterion_main!(benches);
