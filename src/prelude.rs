//! Prelude module for convenient imports
//!
//! Import everything you need with: `use serbench::prelude::*;`

// Domain types
pub use crate::domain::{
    Construct, DateTime, DateTimeKind, DateTimeOffset, DomainError, FixedPoint, Uri,
};

// Generator types
pub use crate::generator::{
    ARITY_GROUPS, CatalogShape, FactoryConfig, Fixture, FixtureFactory, GeneratorError,
    ShapeFamily, ShapeId,
};

// App types
pub use crate::app::{
    AppError, CliApp, HarnessArgs, Partition, extract_int, extract_string, validate_partition,
};
