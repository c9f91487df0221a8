use indexmap::{IndexMap, IndexSet};
use rand::distributions::Alphanumeric;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use time::{Duration, OffsetDateTime};
use tracing::debug;

use crate::domain::{DateTime, DateTimeKind, DomainError};

/// Shortest and longest string produced by `unique_strings`
const UNIQUE_STRING_LENGTH: std::ops::RangeInclusive<usize> = 8..=32;

/// Ascending bytes, element `i` is `i mod 256`
pub fn byte_sequence(count: usize) -> Vec<u8> {
    (0..count).map(|i| i as u8).collect()
}

/// Hourly date/times starting `count / 2` hours after `now`
///
/// Kinds cycle through every `DateTimeKind` except the last, starting
/// with `Unspecified`. Fails with `Overflow` when the last value would
/// fall past the end of the calendar.
pub fn date_time_sequence(
    now: OffsetDateTime,
    count: usize,
) -> Result<Vec<DateTime>, DomainError> {
    let kinds = DateTimeKind::COUNT - 1;
    let start = DateTime::from_offset(now, DateTimeKind::Unspecified)
        .checked_add(hours(count / 2)?)?;

    (0..count)
        .map(|i| {
            let value = start.checked_add(hours(i)?)?;
            Ok(value.with_kind(DateTimeKind::from_index(i % kinds)))
        })
        .collect()
}

fn hours(count: usize) -> Result<Duration, DomainError> {
    let hours = i64::try_from(count).map_err(|_| DomainError::Overflow)?;
    hours
        .checked_mul(3600)
        .map(Duration::seconds)
        .ok_or(DomainError::Overflow)
}

/// Keys `0..count` in ascending order, each mapped to its decimal string
pub fn int_string_map(count: usize) -> IndexMap<i32, String> {
    int_sequence(count)
        .into_iter()
        .map(|key| (key, key.to_string()))
        .collect()
}

/// `0..count`, capped at `i32::MAX` elements
pub fn int_sequence(count: usize) -> Vec<i32> {
    (0..sequence_end(count)).collect()
}

fn sequence_end(count: usize) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}

/// `count` pairwise-distinct alphanumeric strings
///
/// Deterministic for a given seed: the same seed always yields the same
/// strings in the same order. The generator is pinned to ChaCha8 so the
/// sequence does not move with `rand` releases.
pub fn unique_strings(count: usize, seed: u64) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut values = IndexSet::with_capacity(count);
    let mut rejected = 0usize;

    while values.len() < count {
        let len = rng.gen_range(UNIQUE_STRING_LENGTH);
        let candidate: String = (0..len)
            .map(|_| rng.sample(Alphanumeric) as char)
            .collect();

        if !values.insert(candidate) {
            rejected += 1;
        }
    }

    if rejected > 0 {
        debug!(count, rejected, "Redrew duplicate unique strings");
    }

    values.into_iter().collect()
}
