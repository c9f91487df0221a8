use thiserror::Error;

use super::catalog::ShapeId;
use crate::domain::DomainError;

/// Fixture generation errors
///
/// Each variant points at a benchmark misconfiguration or a catalog
/// registration bug. None is meant to be recovered from.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Unsupported shape: {0}")]
    UnsupportedShape(String),

    #[error("Catalog entry for {expected} produced a {actual} fixture")]
    ShapeMismatch { expected: ShapeId, actual: ShapeId },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}
