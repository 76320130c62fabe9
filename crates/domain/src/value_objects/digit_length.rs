//! Validated digit length
//!
//! A `DigitLength` is valid by construction:
//! - at least one digit
//! - at most [`MAX_DIGIT_LENGTH`] digits, so `10^length + r` fits in a `u64`
//!
//! Typed callers go through [`DigitLength::new`]. Untyped input (text, JSON)
//! goes through `FromStr` / `TryFrom<serde_json::Value>`, which additionally
//! reject anything that is not an integer.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::LengthError;

/// Smallest accepted number of digits
pub const MIN_DIGIT_LENGTH: u32 = 1;

/// Largest accepted number of digits (`2 * 10^18 < u64::MAX < 2 * 10^19`)
pub const MAX_DIGIT_LENGTH: u32 = 18;

/// Number of digits used when none is configured
pub const DEFAULT_DIGIT_LENGTH: u32 = 6;

/// Number of decimal digits a generated value is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "u32")]
pub struct DigitLength(u32);

impl DigitLength {
    /// Create a validated digit length.
    ///
    /// # Errors
    ///
    /// Returns `LengthError::TooSmall` below one digit and
    /// `LengthError::TooLarge` above [`MAX_DIGIT_LENGTH`].
    pub fn new(length: i64) -> Result<Self, LengthError> {
        if length < i64::from(MIN_DIGIT_LENGTH) {
            return Err(LengthError::TooSmall(length));
        }
        if length > i64::from(MAX_DIGIT_LENGTH) {
            return Err(LengthError::TooLarge(length));
        }
        // Range checked above, the cast cannot truncate.
        Ok(Self(length as u32))
    }

    /// Returns the number of digits.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Exclusive upper limit of values with this many digits: `10^length`.
    pub fn upper_bound(self) -> u64 {
        10u64.pow(self.0)
    }
}

impl Default for DigitLength {
    fn default() -> Self {
        Self(DEFAULT_DIGIT_LENGTH)
    }
}

impl fmt::Display for DigitLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DigitLength {
    type Err = LengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let length: i64 = s
            .trim()
            .parse()
            .map_err(|_| LengthError::NotAnInteger(s.to_string()))?;
        Self::new(length)
    }
}

impl TryFrom<i64> for DigitLength {
    type Error = LengthError;

    fn try_from(length: i64) -> Result<Self, Self::Error> {
        Self::new(length)
    }
}

/// Only JSON integers are lengths. Numeric strings, floats (even `3.0`),
/// booleans and null are rejected as `NotAnInteger`.
impl TryFrom<Value> for DigitLength {
    type Error = LengthError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match &value {
            Value::Number(n) => {
                if let Some(length) = n.as_i64() {
                    Self::new(length)
                } else if n.is_u64() {
                    Err(LengthError::TooLarge(i64::MAX))
                } else {
                    Err(LengthError::NotAnInteger(n.to_string()))
                }
            }
            Value::String(s) => Err(LengthError::NotAnInteger(s.clone())),
            other => Err(LengthError::NotAnInteger(other.to_string())),
        }
    }
}

impl From<DigitLength> for u32 {
    fn from(length: DigitLength) -> u32 {
        length.0
    }
}
