use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::{Duration, OffsetDateTime, PrimitiveDateTime};

use super::error::DomainError;

/// How a `DateTime` value relates to a time zone
///
/// Variant order matters: date/time sequences cycle through every kind
/// except the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DateTimeKind {
    #[default]
    Unspecified,
    Utc,
    Local,
}

impl DateTimeKind {
    pub const COUNT: usize = 3;

    const ALL: [DateTimeKind; Self::COUNT] = [Self::Unspecified, Self::Utc, Self::Local];

    /// Kind at position `index` in declaration order, wrapping around
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }
}

/// Calendar date and time without an offset, tagged with its kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateTime {
    value: PrimitiveDateTime,
    kind: DateTimeKind,
}

impl DateTime {
    pub fn new(value: PrimitiveDateTime, kind: DateTimeKind) -> Self {
        Self { value, kind }
    }

    /// Drop the offset of `instant` and keep its wall-clock reading
    pub fn from_offset(instant: OffsetDateTime, kind: DateTimeKind) -> Self {
        Self::new(PrimitiveDateTime::new(instant.date(), instant.time()), kind)
    }

    pub fn value(&self) -> PrimitiveDateTime {
        self.value
    }

    pub fn kind(&self) -> DateTimeKind {
        self.kind
    }

    /// Same wall-clock reading under a different kind
    pub fn with_kind(self, kind: DateTimeKind) -> Self {
        Self { kind, ..self }
    }

    pub fn add_years(self, years: i32) -> Result<Self, DomainError> {
        let shifted = add_years(self.value.assume_utc(), years)?;
        Ok(Self::from_offset(shifted, self.kind))
    }

    pub fn checked_add(self, rhs: Duration) -> Result<Self, DomainError> {
        let value = self.value.checked_add(rhs).ok_or(DomainError::Overflow)?;
        Ok(Self::new(value, self.kind))
    }

    pub fn checked_sub(self, rhs: Duration) -> Result<Self, DomainError> {
        let value = self.value.checked_sub(rhs).ok_or(DomainError::Overflow)?;
        Ok(Self::new(value, self.kind))
    }
}

impl Default for DateTime {
    fn default() -> Self {
        Self::from_offset(OffsetDateTime::UNIX_EPOCH, DateTimeKind::Unspecified)
    }
}

/// Instant with a UTC offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateTimeOffset(OffsetDateTime);

impl DateTimeOffset {
    pub fn new(value: OffsetDateTime) -> Self {
        Self(value)
    }

    pub fn value(&self) -> OffsetDateTime {
        self.0
    }

    pub fn add_years(self, years: i32) -> Result<Self, DomainError> {
        add_years(self.0, years).map(Self)
    }

    pub fn checked_add(self, rhs: Duration) -> Result<Self, DomainError> {
        self.0.checked_add(rhs).map(Self).ok_or(DomainError::Overflow)
    }

    pub fn checked_sub(self, rhs: Duration) -> Result<Self, DomainError> {
        self.0.checked_sub(rhs).map(Self).ok_or(DomainError::Overflow)
    }

    /// Short general format, e.g. `3/14/2026 9:05 PM`
    pub fn to_short_string(&self) -> String {
        let format = format_description!(
            "[month padding:none]/[day padding:none]/[year] [hour repr:12 padding:none]:[minute] [period]"
        );
        // Every component of this description is always available on an
        // OffsetDateTime, so formatting only fails on a broken sink.
        self.0.format(&format).unwrap_or_default()
    }
}

impl Default for DateTimeOffset {
    fn default() -> Self {
        Self(OffsetDateTime::UNIX_EPOCH)
    }
}

impl From<OffsetDateTime> for DateTimeOffset {
    fn from(value: OffsetDateTime) -> Self {
        Self(value)
    }
}

/// Shift by whole calendar years; 29 February lands on 28 February
/// when the target year is not a leap year
///
/// Fails with `Overflow` when the target year is outside the supported
/// calendar range.
pub fn add_years(instant: OffsetDateTime, years: i32) -> Result<OffsetDateTime, DomainError> {
    let target = instant.year().checked_add(years).ok_or(DomainError::Overflow)?;
    instant
        .replace_year(target)
        .or_else(|_| instant.replace_day(28).and_then(|d| d.replace_year(target)))
        .map_err(|_| DomainError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn kind_index_wraps() {
        assert_eq!(DateTimeKind::from_index(0), DateTimeKind::Unspecified);
        assert_eq!(DateTimeKind::from_index(1), DateTimeKind::Utc);
        assert_eq!(DateTimeKind::from_index(2), DateTimeKind::Local);
        assert_eq!(DateTimeKind::from_index(3), DateTimeKind::Unspecified);
    }

    #[test]
    fn add_years_keeps_day() {
        let start = datetime!(2024-03-14 10:00 UTC);
        assert_eq!(add_years(start, 1), Ok(datetime!(2025-03-14 10:00 UTC)));
    }

    #[test]
    fn add_years_clamps_leap_day() {
        let leap = datetime!(2024-02-29 12:30 UTC);
        assert_eq!(add_years(leap, 1), Ok(datetime!(2025-02-28 12:30 UTC)));
        assert_eq!(add_years(leap, 4), Ok(datetime!(2028-02-29 12:30 UTC)));
    }

    #[test]
    fn add_years_past_calendar_end_overflows() {
        let last = datetime!(9999-12-31 23:59:59 UTC);
        assert_eq!(add_years(last, 1), Err(DomainError::Overflow));
        assert_eq!(add_years(last, i32::MAX), Err(DomainError::Overflow));
        assert_eq!(
            DateTimeOffset::new(last).add_years(1),
            Err(DomainError::Overflow)
        );
    }

    #[test]
    fn checked_arithmetic_overflows_at_calendar_end() {
        let last = datetime!(9999-12-31 23:00 UTC);
        let offset = DateTimeOffset::new(last);
        let local = DateTime::from_offset(last, DateTimeKind::Local);

        assert_eq!(offset.checked_add(Duration::days(1)), Err(DomainError::Overflow));
        assert_eq!(local.checked_add(Duration::hours(1)), Err(DomainError::Overflow));
        assert_eq!(
            offset.checked_sub(Duration::days(7)).map(|d| d.value()),
            Ok(datetime!(9999-12-24 23:00 UTC))
        );
    }

    #[test]
    fn date_time_arithmetic_preserves_kind() {
        let dt = DateTime::from_offset(datetime!(2026-01-01 0:00 UTC), DateTimeKind::Local);
        let later = dt.checked_add(Duration::hours(5)).unwrap();

        assert_eq!(later.kind(), DateTimeKind::Local);
        assert_eq!(later.value(), datetime!(2026-01-01 5:00));
    }

    #[test]
    fn date_time_add_years() {
        let dt = DateTime::from_offset(datetime!(2026-06-01 8:00 UTC), DateTimeKind::Utc);
        let shifted = dt.add_years(1).unwrap();
        assert_eq!(shifted.value(), datetime!(2027-06-01 8:00));
        assert_eq!(shifted.kind(), DateTimeKind::Utc);
    }

    #[test]
    fn defaults_are_unix_epoch() {
        assert_eq!(DateTime::default().value(), datetime!(1970-01-01 0:00));
        assert_eq!(DateTime::default().kind(), DateTimeKind::Unspecified);
        assert_eq!(DateTimeOffset::default().value(), OffsetDateTime::UNIX_EPOCH);
    }

    #[test]
    fn short_string_format() {
        let value = DateTimeOffset::new(datetime!(2026-03-14 21:05 UTC));
        assert_eq!(value.to_short_string(), "3/14/2026 9:05 PM");
    }
}
