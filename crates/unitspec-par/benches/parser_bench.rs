//! Parser benchmarks.
//!
//! Run with: `cargo bench --package unitspec-par`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use unitspec_sys::ReferenceSystem;
use unitspec_util::Handler;

fn parse_once(source: &str) {
    let system = ReferenceSystem::new();
    let handler = Handler::new();
    let _ = unitspec_par::parse(source, &system, &handler);
}

fn bench_parser_simple_units(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_simple_units");

    group.throughput(Throughput::Bytes("kg m s-2".len() as u64));

    group.bench_function("short_unit", |b| b.iter(|| parse_once(black_box("m"))));

    group.bench_function("si_derived_unit", |b| {
        b.iter(|| parse_once(black_box("kg m s-2")))
    });

    group.finish();
}

fn bench_parser_nested_fraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_nested_fraction");

    let source = "(kg m2 s-2) / (mol K)";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("nested_fraction", |b| b.iter(|| parse_once(black_box(source))));

    group.finish();
}

fn bench_parser_prefix_peeling(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_prefix_peeling");

    group.bench_function("kilometer", |b| b.iter(|| parse_once(black_box("kilometer"))));

    group.bench_function("unresolved_identifier", |b| {
        b.iter(|| parse_once(black_box("smoot")))
    });

    group.finish();
}

fn bench_parser_timestamp_shift(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_timestamp_shift");

    group.bench_function("packed_date", |b| {
        b.iter(|| parse_once(black_box("s @ 19700101")))
    });

    group.bench_function("broken_date_with_clock_and_tz", |b| {
        b.iter(|| parse_once(black_box("s @ 1970-01-01T01:00:00+01:00")))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parser_simple_units,
    bench_parser_nested_fraction,
    bench_parser_prefix_peeling,
    bench_parser_timestamp_shift,
);
criterion_main!(benches);
