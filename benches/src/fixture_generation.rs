mod common;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serbench::generator::values;
use serbench::prelude::*;
use common::bench_factory;

/// Benchmark generating each catalog shape
fn bench_generate_shape(c: &mut Criterion) {
    let factory = bench_factory();
    let mut group = c.benchmark_group("generate_shape");

    for id in ShapeId::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(id), id, |b, id| {
            b.iter(|| black_box(factory.generate(black_box(*id)).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark generating the whole catalog
fn bench_generate_all(c: &mut Criterion) {
    let factory = bench_factory();
    c.bench_function("generate_all", |b| {
        b.iter(|| black_box(factory.generate_all().unwrap()))
    });
}

/// Benchmark distinct string generation at growing sizes
fn bench_unique_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("unique_strings");

    for count in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| black_box(values::unique_strings(count, 12345)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate_shape, bench_generate_all, bench_unique_strings);
criterion_main!(benches);
