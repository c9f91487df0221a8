mod common;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serbench::prelude::*;
use common::{bench_factory, fixture, shapes_in};

const FAMILIES: [ShapeFamily; 6] = [
    ShapeFamily::ViewModel,
    ShapeFamily::ConstructionArity,
    ShapeFamily::PrimitiveCollection,
    ShapeFamily::StringContainer,
    ShapeFamily::Simple,
    ShapeFamily::Exotic,
];

/// Benchmark JSON serialization of every catalog shape, grouped by family
fn bench_serialize_json(c: &mut Criterion) {
    let factory = bench_factory();

    for family in FAMILIES {
        let mut group = c.benchmark_group(format!("serialize_json/{family}"));

        for id in shapes_in(family) {
            let fixture = fixture(&factory, id);
            let size = serde_json::to_vec(&fixture).map(|v| v.len()).unwrap_or(0);
            group.throughput(Throughput::Bytes(size as u64));

            group.bench_with_input(BenchmarkId::from_parameter(id), &fixture, |b, fixture| {
                b.iter(|| black_box(serde_json::to_vec(black_box(fixture)).unwrap()));
            });
        }

        group.finish();
    }
}

/// Benchmark pretty-printed output for the largest shapes
fn bench_serialize_pretty(c: &mut Criterion) {
    let factory = bench_factory();
    let mut group = c.benchmark_group("serialize_json_pretty");

    for id in [ShapeId::MyEventsListerViewModel, ShapeId::CollectionsOfPrimitives] {
        let fixture = fixture(&factory, id);
        group.bench_with_input(BenchmarkId::from_parameter(id), &fixture, |b, fixture| {
            b.iter(|| black_box(serde_json::to_vec_pretty(black_box(fixture)).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_serialize_json, bench_serialize_pretty);
criterion_main!(benches);
