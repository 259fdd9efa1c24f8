use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use crate::error::{PatternError, Result};

/// Side length of a pattern, always within `Size::MIN..=Size::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Size(u8);

impl Size {
    pub const MIN: u8 = 3;
    pub const MAX: u8 = 9;

    pub fn new(value: i64) -> Result<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Size(value as u8))
        } else {
            Err(PatternError::OutOfRangeSize { value })
        }
    }

    pub fn get(self) -> usize {
        usize::from(self.0)
    }

    /// Same as `get`, for arithmetic on cell values.
    pub fn as_u32(self) -> u32 {
        u32::from(self.0)
    }
}

impl TryFrom<i64> for Size {
    type Error = PatternError;

    fn try_from(value: i64) -> Result<Self> {
        Size::new(value)
    }
}

impl FromStr for Size {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let value = parse_integer(trimmed)
            .ok_or_else(|| PatternError::MalformedInput(trimmed.to_string()))?;
        Size::new(value)
    }
}

/// Parse an integer answer. Digits too large for `i64` saturate, so they are
/// still treated as numbers (and rejected as out of range) rather than as text.
pub fn parse_integer(token: &str) -> Option<i64> {
    match token.parse::<i64>() {
        Ok(value) => Some(value),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
