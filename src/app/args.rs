//! Flag extraction from raw process arguments
//!
//! Each extractor removes the first `--flag value` pair it recognizes and
//! hands back the remaining tokens, so the harness can forward them to its
//! own benchmark-selection parser.

use std::path::PathBuf;

use time::OffsetDateTime;
use tracing::debug;

use super::error::AppError;
use crate::generator::{GeneratorError, ShapeId};

pub const PARTITION_COUNT_FLAG: &str = "--partition-count";
pub const PARTITION_INDEX_FLAG: &str = "--partition-index";
pub const SHAPE_FLAG: &str = "--shape";
pub const REFERENCE_TIME_FLAG: &str = "--reference-time";
pub const OUTPUT_DIR_FLAG: &str = "--output-dir";

/// Remove `flag` and the integer after it
///
/// Tokens come back unchanged with `None` when `flag` is absent. Only the
/// first occurrence is consumed.
pub fn extract_int(
    tokens: Vec<String>,
    flag: &str,
) -> Result<(Vec<String>, Option<i32>), AppError> {
    extract_with(tokens, flag, "must be followed by an integer", |value| {
        value.parse::<i32>().ok()
    })
}

/// Remove `flag` and the token after it, taken verbatim
pub fn extract_string(
    tokens: Vec<String>,
    flag: &str,
) -> Result<(Vec<String>, Option<String>), AppError> {
    extract_with(tokens, flag, "must be followed by a string", |value| {
        Some(value.to_string())
    })
}

fn extract_with<T>(
    mut tokens: Vec<String>,
    flag: &str,
    reason: &str,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Result<(Vec<String>, Option<T>), AppError> {
    let Some(position) = tokens.iter().position(|token| token == flag) else {
        return Ok((tokens, None));
    };

    let value = tokens
        .get(position + 1)
        .and_then(|token| parse(token))
        .ok_or_else(|| AppError::MalformedArgument {
            flag: flag.to_string(),
            reason: reason.to_string(),
        })?;

    tokens.drain(position..=position + 1);
    Ok((tokens, Some(value)))
}

/// One slice of a round-robin split of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    count: usize,
    index: usize,
}

impl Partition {
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the item at `position` belongs to this slice
    pub fn contains(&self, position: usize) -> bool {
        position % self.count == self.index
    }
}

/// Check that partition flags were given together and in range
///
/// All three bounds are checked on their own, so a negative index is
/// reported even when the count is also invalid.
pub fn validate_partition(
    count: Option<i32>,
    index: Option<i32>,
) -> Result<Option<Partition>, AppError> {
    let (count, index) = match (count, index) {
        (None, None) => return Ok(None),
        (Some(count), Some(index)) => (count, index),
        _ => {
            return Err(AppError::InvalidPartitionSpec(format!(
                "{PARTITION_COUNT_FLAG} and {PARTITION_INDEX_FLAG} must be used together"
            )));
        }
    };

    if count < 2 {
        return Err(AppError::InvalidPartitionSpec(format!(
            "{PARTITION_COUNT_FLAG} must be at least 2, got {count}"
        )));
    }
    if index < 0 {
        return Err(AppError::InvalidPartitionSpec(format!(
            "{PARTITION_INDEX_FLAG} must not be negative, got {index}"
        )));
    }
    if index >= count {
        return Err(AppError::InvalidPartitionSpec(format!(
            "{PARTITION_INDEX_FLAG} {index} must be less than {PARTITION_COUNT_FLAG} {count}"
        )));
    }

    Ok(Some(Partition {
        count: count as usize,
        index: index as usize,
    }))
}

/// Flags understood by the `serbench` binary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HarnessArgs {
    pub partition: Option<Partition>,
    pub shape: Option<String>,
    pub reference_time: Option<OffsetDateTime>,
    pub output_dir: Option<PathBuf>,
    /// Tokens left for the benchmark runner
    pub forwarded: Vec<String>,
}

impl HarnessArgs {
    /// Extract every known flag from `tokens`
    pub fn extract(tokens: Vec<String>) -> Result<Self, AppError> {
        let (tokens, count) = extract_int(tokens, PARTITION_COUNT_FLAG)?;
        let (tokens, index) = extract_int(tokens, PARTITION_INDEX_FLAG)?;
        let partition = validate_partition(count, index)?;

        let (tokens, shape) = extract_string(tokens, SHAPE_FLAG)?;
        let (tokens, reference_time) = extract_string(tokens, REFERENCE_TIME_FLAG)?;
        let reference_time = reference_time
            .map(|value| parse_unix_seconds(&value))
            .transpose()?;
        let (tokens, output_dir) = extract_string(tokens, OUTPUT_DIR_FLAG)?;

        debug!(forwarded = tokens.len(), "Extracted harness arguments");

        Ok(Self {
            partition,
            shape,
            reference_time,
            output_dir: output_dir.map(PathBuf::from),
            forwarded: tokens,
        })
    }

    /// The requested shape, or the catalog slice owned by this partition
    pub fn selected_shapes(&self) -> Result<Vec<ShapeId>, GeneratorError> {
        let candidates = match &self.shape {
            Some(name) => vec![name.parse::<ShapeId>()?],
            None => ShapeId::ALL.to_vec(),
        };

        Ok(match self.partition {
            Some(partition) => candidates
                .into_iter()
                .enumerate()
                .filter(|(position, _)| partition.contains(*position))
                .map(|(_, id)| id)
                .collect(),
            None => candidates,
        })
    }
}

fn parse_unix_seconds(value: &str) -> Result<OffsetDateTime, AppError> {
    let malformed = || AppError::MalformedArgument {
        flag: REFERENCE_TIME_FLAG.to_string(),
        reason: "must be followed by Unix seconds".to_string(),
    };

    let seconds = value.parse::<i64>().map_err(|_| malformed())?;
    OffsetDateTime::from_unix_timestamp(seconds).map_err(|_| malformed())
}
