use serbench::prelude::*;
use time::macros::datetime;

/// Factory pinned to one reference time so every run sees the same payloads
pub fn bench_factory() -> FixtureFactory {
    FixtureFactory::with_config(
        FactoryConfig::new().with_reference_time(datetime!(2026-01-01 0:00 UTC)),
    )
}

/// Catalog shapes belonging to `family`, in catalog order
pub fn shapes_in(family: ShapeFamily) -> Vec<ShapeId> {
    ShapeId::ALL
        .iter()
        .copied()
        .filter(|id| id.family() == family)
        .collect()
}

/// Generate `id`, panicking on a broken catalog
pub fn fixture(factory: &FixtureFactory, id: ShapeId) -> Fixture {
    factory
        .generate(id)
        .unwrap_or_else(|e| panic!("failed to generate {id}: {e}"))
}
