//! Lexer benchmarks.
//!
//! Run with: `cargo bench --package unitspec-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use unitspec_lex::Lexer;
use unitspec_util::Handler;

fn lexer_token_count(source: &str) -> usize {
    let handler = Handler::new();
    let lexer = Lexer::new(source, &handler);
    lexer.count()
}

fn bench_lexer_simple_units(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_simple_units");

    group.throughput(Throughput::Bytes("kg m s-2".len() as u64));

    group.bench_function("short_unit", |b| b.iter(|| lexer_token_count(black_box("m"))));

    group.bench_function("si_derived_unit", |b| {
        b.iter(|| lexer_token_count(black_box("kg m s-2")))
    });

    group.finish();
}

fn bench_lexer_parenthesized(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_parenthesized");

    let source = "(kg m2 s-2) / (mol K)";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("nested_fraction", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_numbers");

    group.bench_function("integer_exponent", |b| {
        b.iter(|| lexer_token_count(black_box("m^-2")))
    });

    group.bench_function("real_with_exponent", |b| {
        b.iter(|| lexer_token_count(black_box("1.602176634e-19 C")))
    });

    group.finish();
}

fn bench_lexer_logref(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_logref");

    group.bench_function("decibel_milliwatt", |b| {
        b.iter(|| lexer_token_count(black_box("lg(re 1 mW)")))
    });

    group.finish();
}

fn bench_lexer_timestamp(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_timestamp");

    let source = "s after 2000-01-01T12:00:00Z";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("broken_datetime", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.bench_function("packed_datetime", |b| {
        b.iter(|| lexer_token_count(black_box("s @19700101T000000Z")))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_simple_units,
    bench_lexer_parenthesized,
    bench_lexer_numbers,
    bench_lexer_logref,
    bench_lexer_timestamp,
);
criterion_main!(benches);
