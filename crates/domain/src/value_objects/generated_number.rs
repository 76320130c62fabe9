//! Generated number value object and zero padding

use serde::{Deserialize, Serialize};
use std::fmt;

use super::DigitLength;

/// Left-pad `number` with zeros to exactly `length` digits.
///
/// `10^length + number` always has `length + 1` digits and starts with `1`
/// when `number < 10^length`, so dropping the first character leaves the
/// zero-padded digits. Returns `None` when `number` does not fit.
pub fn pad(length: DigitLength, number: u64) -> Option<String> {
    let upper_bound = length.upper_bound();
    if number >= upper_bound {
        return None;
    }
    let value = (upper_bound + number).to_string();
    Some(value[1..].to_string())
}

/// A generated value, either raw or zero-padded
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeneratedNumber {
    /// Padding disabled: the drawn integer
    Integer(u64),
    /// Padding enabled: exactly `length` ASCII digits
    Padded(String),
}

impl GeneratedNumber {
    /// The numeric value, ignoring any leading zeros. `None` only for a
    /// `Padded` value that was built by hand from non-digits.
    pub fn value(&self) -> Option<u64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Padded(digits) => digits.parse().ok(),
        }
    }

    /// The padded digits, if this value was padded.
    pub fn as_padded(&self) -> Option<&str> {
        match self {
            Self::Padded(digits) => Some(digits),
            Self::Integer(_) => None,
        }
    }

    /// The raw integer, if this value was not padded.
    pub fn as_integer(&self) -> Option<u64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Padded(_) => None,
        }
    }

    pub fn is_padded(&self) -> bool {
        matches!(self, Self::Padded(_))
    }
}

impl fmt::Display for GeneratedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::Padded(digits) => write!(f, "{}", digits),
        }
    }
}
