mod common;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serbench::domain::*;
use common::bench_factory;

/// Benchmark reading payloads through each construction protocol
///
/// `average_order` feeds every type the base payload, where constructor
/// fields sit wherever the base declares them. `ctor_args_first` feeds each
/// sibling its own payload, which lists constructor arguments first.
fn bench_family<B, Few, Many>(c: &mut Criterion, name: &str, base: &B)
where
    B: Serialize + DeserializeOwned + Clone,
    Few: Serialize + DeserializeOwned + Construct<B>,
    Many: Serialize + DeserializeOwned + Construct<B>,
{
    let payload = serde_json::to_vec(base).unwrap();
    let few_payload = serde_json::to_vec(&Few::construct(base)).unwrap();
    let many_payload = serde_json::to_vec(&Many::construct(base)).unwrap();

    let mut group = c.benchmark_group(format!("deserialize_arity/{name}"));

    group.bench_with_input(BenchmarkId::new("average_order", "parameterless"), &payload, |b, p| {
        b.iter(|| black_box(serde_json::from_slice::<B>(black_box(p)).unwrap()));
    });
    group.bench_with_input(BenchmarkId::new("average_order", "few_args"), &payload, |b, p| {
        b.iter(|| black_box(serde_json::from_slice::<Few>(black_box(p)).unwrap()));
    });
    group.bench_with_input(BenchmarkId::new("average_order", "many_args"), &payload, |b, p| {
        b.iter(|| black_box(serde_json::from_slice::<Many>(black_box(p)).unwrap()));
    });
    group.bench_with_input(BenchmarkId::new("ctor_args_first", "few_args"), &few_payload, |b, p| {
        b.iter(|| black_box(serde_json::from_slice::<Few>(black_box(p)).unwrap()));
    });
    group.bench_with_input(
        BenchmarkId::new("ctor_args_first", "many_args"),
        &many_payload,
        |b, p| {
            b.iter(|| black_box(serde_json::from_slice::<Many>(black_box(p)).unwrap()));
        },
    );

    group.finish();

    let mut group = c.benchmark_group(format!("construct_arity/{name}"));
    group.bench_function("parameterless", |b| {
        b.iter(|| black_box(B::clone(black_box(base))))
    });
    group.bench_function("few_args", |b| b.iter(|| black_box(Few::construct(black_box(base)))));
    group.bench_function("many_args", |b| b.iter(|| black_box(Many::construct(black_box(base)))));
    group.finish();
}

fn bench_construction_arity(c: &mut Criterion) {
    let factory = bench_factory();

    let login: LoginViewModel = factory.generate_as().unwrap();
    bench_family::<_, ParameterizedLoginViewModel1Arg, ParameterizedLoginViewModel3Args>(
        c,
        "LoginViewModel",
        &login,
    );

    let location: Location = factory.generate_as().unwrap();
    bench_family::<_, ParameterizedLocation1Arg, ParameterizedLocation9Args>(
        c,
        "Location",
        &location,
    );

    let index: IndexViewModel = factory.generate_as().unwrap();
    bench_family::<_, ParameterizedIndexViewModel1Arg, ParameterizedIndexViewModel2Args>(
        c,
        "IndexViewModel",
        &index,
    );

    let events: MyEventsListerViewModel = factory.generate_as().unwrap();
    bench_family::<
        _,
        ParameterizedMyEventsListerViewModel1Arg,
        ParameterizedMyEventsListerViewModel3Args,
    >(c, "MyEventsListerViewModel", &events);

    let point: Point = factory.generate_as().unwrap();
    bench_family::<_, ParameterizedPoint1Arg, ParameterizedPoint2Args>(c, "Point", &point);

    let primitives: ClassWithPrimitives = factory.generate_as().unwrap();
    bench_family::<
        _,
        ParameterizedClassWithPrimitives3Args,
        ParameterizedClassWithPrimitives8Args,
    >(c, "ClassWithPrimitives", &primitives);

    let complex: ComplexClass = factory.generate_as().unwrap();
    bench_family::<_, ParameterizedComplexClass2Args, ParameterizedComplexClass8Args>(
        c,
        "ComplexClass",
        &complex,
    );
}

criterion_group!(benches, bench_construction_arity);
criterion_main!(benches);
