use serde::Deserialize;
use time::OffsetDateTime;

/// Element count of the string-container shapes
pub const DEFAULT_COLLECTION_SIZE: usize = 100;

/// Element count of the binary and primitive-collection shapes
pub const DEFAULT_PRIMITIVE_COLLECTION_SIZE: usize = 1024;

pub const DEFAULT_UNIQUE_VALUE_SEED: u64 = 12345;

/// Fixture factory settings
///
/// Deserializable so a harness can embed it in its own configuration;
/// `reference_time` is read as Unix seconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
    pub collection_size: usize,
    pub primitive_collection_size: usize,
    #[serde(with = "time::serde::timestamp::option")]
    pub reference_time: Option<OffsetDateTime>,
    pub unique_value_seed: u64,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            collection_size: DEFAULT_COLLECTION_SIZE,
            primitive_collection_size: DEFAULT_PRIMITIVE_COLLECTION_SIZE,
            reference_time: None,
            unique_value_seed: DEFAULT_UNIQUE_VALUE_SEED,
        }
    }
}

impl FactoryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection_size(mut self, size: usize) -> Self {
        self.collection_size = size;
        self
    }

    pub fn with_primitive_collection_size(mut self, size: usize) -> Self {
        self.primitive_collection_size = size;
        self
    }

    /// Pin "now" so that separate runs produce identical fixtures
    pub fn with_reference_time(mut self, reference_time: OffsetDateTime) -> Self {
        self.reference_time = Some(reference_time);
        self
    }

    pub fn with_unique_value_seed(mut self, seed: u64) -> Self {
        self.unique_value_seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn defaults_match_catalog_sizes() {
        let config = FactoryConfig::new();
        assert_eq!(config.collection_size, 100);
        assert_eq!(config.primitive_collection_size, 1024);
        assert_eq!(config.reference_time, None);
        assert_eq!(config.unique_value_seed, 12345);
    }

    #[test]
    fn builder_overrides() {
        let now = datetime!(2026-10-16 0:00 UTC);
        let config = FactoryConfig::new()
            .with_collection_size(10)
            .with_primitive_collection_size(16)
            .with_reference_time(now)
            .with_unique_value_seed(1);

        assert_eq!(config.collection_size, 10);
        assert_eq!(config.primitive_collection_size, 16);
        assert_eq!(config.reference_time, Some(now));
        assert_eq!(config.unique_value_seed, 1);
    }

    #[test]
    fn deserializes_partial_config() {
        let config: FactoryConfig =
            serde_json::from_str(r#"{"collection_size": 5, "reference_time": 0}"#).unwrap();

        assert_eq!(config.collection_size, 5);
        assert_eq!(config.primitive_collection_size, 1024);
        assert_eq!(config.reference_time, Some(OffsetDateTime::UNIX_EPOCH));
    }
}
