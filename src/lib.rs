//! Deterministic fixture catalog for serialization benchmarks
//!
//! [`generator::FixtureFactory`] builds canonical instances of every shape in
//! the catalog, and [`app::args`] pulls partition and harness flags out of the
//! process arguments before they reach a benchmark runner.

pub mod app;
pub mod domain;
pub mod generator;
pub mod prelude;
