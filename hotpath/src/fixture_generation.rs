use serbench::prelude::*;
use time::macros::datetime;

/// Fixture generation hotpath profiling
///
/// Generates the whole catalog repeatedly and serializes each fixture, so the
/// profile splits time between building object graphs and writing JSON.
///
/// Run with: cargo run --release --bin hotpath_fixture_generation --features profiling
#[hotpath::main]
fn main() {
    println!("=== Fixture Generation Hotpath Profile ===");
    println!("Workload: 1K passes over {} catalog shapes", ShapeId::ALL.len());
    println!();

    let factory = FixtureFactory::with_config(
        FactoryConfig::new().with_reference_time(datetime!(2026-01-01 0:00 UTC)),
    );

    println!("Starting profiled execution...");
    println!();

    let bytes = run_workload(&factory, 1_000);

    println!();
    println!("Serialized {} bytes in total.", bytes);
    println!("Profiling complete. Results above show function-level breakdown.");
}

#[hotpath::measure]
fn run_workload(factory: &FixtureFactory, passes: usize) -> usize {
    let mut bytes = 0;
    for _ in 0..passes {
        for id in ShapeId::ALL {
            let fixture = generate(factory, *id);
            bytes += serialize(&fixture);
        }
    }
    bytes
}

#[hotpath::measure]
fn generate(factory: &FixtureFactory, id: ShapeId) -> Fixture {
    match factory.generate(id) {
        Ok(fixture) => fixture,
        Err(e) => panic!("failed to generate {id}: {e}"),
    }
}

#[hotpath::measure]
fn serialize(fixture: &Fixture) -> usize {
    serde_json::to_vec(fixture).map(|v| v.len()).unwrap_or(0)
}
