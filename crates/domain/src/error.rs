//! Unified error types for the domain layer
//!
//! Construction-time validation failures and random source failures are kept
//! as separate variants so callers can tell a bad configuration apart from a
//! runtime failure of the random source.

use thiserror::Error;

/// Why a digit length was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LengthError {
    /// The input was not an integer (text, float, null, ...)
    #[error("Length must be a valid integer, got '{0}'")]
    NotAnInteger(String),
    /// The length is below the minimum of one digit
    #[error("The length of the number cannot be smaller than 1, got {0}")]
    TooSmall(i64),
    /// The length would overflow the padding arithmetic
    #[error("The length of the number cannot be larger than 18, got {0}")]
    TooLarge(i64),
}

/// Unified error type for number generation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// Rejected at construction time
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] LengthError),

    /// Configuration input has the wrong shape
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The underlying random source failed or misbehaved
    #[error("Random source unavailable: {0}")]
    RandomSourceUnavailable(String),
}

impl GeneratorError {
    /// Create a random source error
    pub fn random_source(msg: impl Into<String>) -> Self {
        Self::RandomSourceUnavailable(msg.into())
    }

    /// Check if this error was raised by construction-time validation.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_error_messages_are_distinct() {
        let not_int = LengthError::NotAnInteger("five".to_string()).to_string();
        let too_small = LengthError::TooSmall(0).to_string();
        let too_large = LengthError::TooLarge(19).to_string();

        assert_eq!(not_int, "Length must be a valid integer, got 'five'");
        assert_eq!(
            too_small,
            "The length of the number cannot be smaller than 1, got 0"
        );
        assert_eq!(
            too_large,
            "The length of the number cannot be larger than 18, got 19"
        );
    }

    #[test]
    fn test_invalid_argument_wraps_length_error() {
        let err: GeneratorError = LengthError::TooSmall(-1).into();
        assert!(err.is_invalid_argument());
        assert_eq!(
            err.to_string(),
            "Invalid argument: The length of the number cannot be smaller than 1, got -1"
        );
    }

    #[test]
    fn test_random_source_is_not_invalid_argument() {
        let err = GeneratorError::random_source("entropy exhausted");
        assert!(!err.is_invalid_argument());
        assert_eq!(err.to_string(), "Random source unavailable: entropy exhausted");
    }
}
