use time::OffsetDateTime;
use tracing::{debug, warn};

use super::catalog::{self, CatalogShape, Fixture, ShapeId};
use super::config::FactoryConfig;
use super::error::GeneratorError;
use super::values;

/// Builds fresh catalog fixtures on demand
///
/// Holds only immutable settings, so one factory can be shared across
/// threads. Every call allocates a new instance; nothing is cached.
#[derive(Debug, Clone)]
pub struct FixtureFactory {
    config: FactoryConfig,
    now: OffsetDateTime,
}

impl FixtureFactory {
    /// Factory with default sizes, "now" captured once at creation
    pub fn new() -> Self {
        Self::with_config(FactoryConfig::default())
    }

    pub fn with_config(config: FactoryConfig) -> Self {
        let now = config.reference_time.unwrap_or_else(current_second);
        Self { config, now }
    }

    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    /// Reference time all relative date/times are derived from
    pub fn now(&self) -> OffsetDateTime {
        self.now
    }

    /// Generate the fixture registered for `id`
    pub fn generate(&self, id: ShapeId) -> Result<Fixture, GeneratorError> {
        let entry = catalog::lookup(id).ok_or_else(|| {
            warn!(shape = %id, "Shape missing from catalog");
            GeneratorError::UnsupportedShape(id.name().to_string())
        })?;

        debug!(shape = %id, "Generating fixture");
        let fixture = (entry.build)(self)?;

        if fixture.shape() != id {
            return Err(GeneratorError::ShapeMismatch {
                expected: id,
                actual: fixture.shape(),
            });
        }

        Ok(fixture)
    }

    /// Generate by shape name (case-insensitive)
    pub fn generate_named(&self, name: &str) -> Result<Fixture, GeneratorError> {
        let id = name.parse::<ShapeId>().inspect_err(|_| {
            warn!(shape = name, "Unknown shape name");
        })?;
        self.generate(id)
    }

    /// Generate the catalog shape `T` as its concrete type
    pub fn generate_as<T: CatalogShape>(&self) -> Result<T, GeneratorError> {
        let fixture = self.generate(T::ID)?;
        T::from_fixture(fixture).map_err(|other| GeneratorError::ShapeMismatch {
            expected: T::ID,
            actual: other.shape(),
        })
    }

    /// Generate every catalog shape, in catalog order
    pub fn generate_all(&self) -> Result<Vec<Fixture>, GeneratorError> {
        ShapeId::ALL.iter().map(|id| self.generate(*id)).collect()
    }

    /// Distinct strings backing the string-container shapes
    pub fn unique_strings(&self) -> Vec<String> {
        values::unique_strings(self.config.collection_size, self.config.unique_value_seed)
    }
}

impl Default for FixtureFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Current UTC time without sub-second precision
fn current_second() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();
    now.replace_nanosecond(0).unwrap_or(now)
}
