use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Fixed-point decimal using i64 scaled by 10,000 (4 decimal places)
///
/// Serialized as its decimal string so that payloads carry a decimal
/// literal rather than the raw scaled integer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct FixedPoint(i64);

impl FixedPoint {
    const SCALE: i64 = 10_000;

    /// Create from raw scaled value
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Get raw scaled value
    pub fn raw(&self) -> i64 {
        self.0
    }

    /// Parse from decimal string (e.g., "1.5000")
    pub fn from_decimal_str(s: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidAmount(s.to_string());
        let trimmed = s.trim();

        let (is_negative, digits) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };

        let (integer_part, decimal_part) = match digits.split_once('.') {
            Some((int, dec)) if !dec.contains('.') => (int, dec),
            Some(_) => return Err(invalid()),
            None => (digits, ""),
        };

        if decimal_part.len() > 4 || !decimal_part.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let integer: i64 = integer_part.parse().map_err(|_| invalid())?;
        if integer < 0 {
            return Err(invalid());
        }

        let decimal: i64 = format!("{:0<4}", decimal_part)
            .parse()
            .map_err(|_| invalid())?;

        let scaled = integer
            .checked_mul(Self::SCALE)
            .and_then(|v| v.checked_add(decimal))
            .ok_or(DomainError::Overflow)?;

        Ok(Self(if is_negative { -scaled } else { scaled }))
    }

    /// Convert to decimal string with 4 decimal places
    pub fn to_decimal_string(&self) -> String {
        let abs_value = self.0.unsigned_abs();
        let scale = Self::SCALE as u64;
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:04}", sign, abs_value / scale, abs_value % scale)
    }
}

impl fmt::Display for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}

impl FromStr for FixedPoint {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal_str(s)
    }
}

impl TryFrom<String> for FixedPoint {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_decimal_str(&value)
    }
}

impl From<FixedPoint> for String {
    fn from(value: FixedPoint) -> Self {
        value.to_decimal_string()
    }
}
