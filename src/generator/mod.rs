//! Deterministic fixture generation for the shape catalog

pub mod catalog;
pub mod config;
pub mod error;
pub mod factory;
pub mod shapes;
pub mod values;

pub use catalog::{
    ARITY_GROUPS, CATALOG, CatalogEntry, CatalogShape, Fixture, ShapeFamily, ShapeId,
};
pub use config::FactoryConfig;
pub use error::GeneratorError;
pub use factory::FixtureFactory;
