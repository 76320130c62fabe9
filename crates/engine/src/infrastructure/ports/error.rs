//! Error types for port operations.

use simplerng_domain::GeneratorError;

/// Random source errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RandomError {
    /// The entropy source (or the lock guarding a seeded generator) failed.
    #[error("{source_name} failed: {message}")]
    Unavailable {
        source_name: &'static str,
        message: String,
    },

    /// Asked to draw from `[0, 0)`.
    #[error("cannot draw from an empty range")]
    EmptyRange,

    /// A draw fell outside the requested `[0, upper_bound)` range.
    #[error("drew {value}, expected a value below {upper_bound}")]
    OutOfRange { value: u64, upper_bound: u64 },
}

impl RandomError {
    /// Create an Unavailable error with the failing source's name.
    pub fn unavailable(source_name: &'static str, message: impl ToString) -> Self {
        Self::Unavailable {
            source_name,
            message: message.to_string(),
        }
    }

    /// Create an OutOfRange error.
    pub fn out_of_range(value: u64, upper_bound: u64) -> Self {
        Self::OutOfRange { value, upper_bound }
    }
}

impl From<RandomError> for GeneratorError {
    fn from(err: RandomError) -> Self {
        GeneratorError::RandomSourceUnavailable(err.to_string())
    }
}
