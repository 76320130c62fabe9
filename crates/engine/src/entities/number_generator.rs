//! Number generator entity operations.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use simplerng_domain::{self as domain, GeneratedNumber, GeneratorConfig, GeneratorError};

use crate::infrastructure::ports::{RandomError, RandomPort};
use crate::infrastructure::random::SystemRandom;

/// Generates fixed-digit random numbers.
///
/// The configuration is validated once, at construction; `upper_bound`
/// (`10^length`) is fixed from then on. Cloning is cheap and clones share the
/// random source. The generator itself holds no mutable state, so it is safe
/// to share across threads as long as the random source is.
#[derive(Clone)]
pub struct NumberGenerator {
    config: GeneratorConfig,
    upper_bound: u64,
    random: Arc<dyn RandomPort>,
}

impl NumberGenerator {
    /// Generator drawing from the thread-local system RNG.
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_random(config, Arc::new(SystemRandom::new()))
    }

    pub fn with_random(config: GeneratorConfig, random: Arc<dyn RandomPort>) -> Self {
        let upper_bound = config.length.upper_bound();
        tracing::debug!(
            length = config.length.get(),
            upper_bound,
            pad_number = config.pad_number,
            "Number generator created"
        );
        Self {
            config,
            upper_bound,
            random,
        }
    }

    /// Validating factory for a native integer length.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::InvalidArgument` if `length` is below 1 or
    /// above 18. Nothing is drawn before validation passes.
    pub fn create(length: i64, pad_number: bool) -> Result<Self, GeneratorError> {
        let config = GeneratorConfig::new(length, pad_number).inspect_err(|e| {
            tracing::warn!(length, error = %e, "Rejected number generator length");
        })?;
        Ok(Self::new(config))
    }

    /// Validating factory for untyped JSON input such as
    /// `{"length": 4, "padNumber": false}`.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::InvalidArgument` if `length` is not an
    /// integer or is out of range, and `GeneratorError::InvalidConfig` if the
    /// input is not an object.
    pub fn from_value(value: &Value) -> Result<Self, GeneratorError> {
        let config = GeneratorConfig::from_value(value).inspect_err(|e| {
            tracing::warn!(input = %value, error = %e, "Rejected number generator config");
        })?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> GeneratorConfig {
        self.config
    }

    pub fn length(&self) -> u32 {
        self.config.length.get()
    }

    /// Exclusive upper limit of generated values.
    pub fn upper_bound(&self) -> u64 {
        self.upper_bound
    }

    pub fn pads(&self) -> bool {
        self.config.pad_number
    }

    /// Draw a value in `[0, 10^length)`, padded or not per the configuration.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::RandomSourceUnavailable` if the random source
    /// fails or returns a value outside the range.
    pub fn generate(&self) -> Result<GeneratedNumber, GeneratorError> {
        if self.config.pad_number {
            self.generate_padded().map(GeneratedNumber::Padded)
        } else {
            self.generate_integer().map(GeneratedNumber::Integer)
        }
    }

    /// Draw a raw integer, ignoring the padding flag.
    pub fn generate_integer(&self) -> Result<u64, GeneratorError> {
        let value = self.draw()?;
        tracing::trace!(value, "Generated number");
        Ok(value)
    }

    /// Draw a zero-padded string of exactly `length` digits, ignoring the
    /// padding flag.
    pub fn generate_padded(&self) -> Result<String, GeneratorError> {
        let value = self.draw()?;
        let padded = domain::pad(self.config.length, value)
            .ok_or_else(|| RandomError::out_of_range(value, self.upper_bound))?;
        tracing::trace!(value, padded = %padded, "Generated padded number");
        Ok(padded)
    }

    fn draw(&self) -> Result<u64, GeneratorError> {
        let value = self
            .random
            .gen_below(self.upper_bound)
            .and_then(|value| {
                if value < self.upper_bound {
                    Ok(value)
                } else {
                    Err(RandomError::out_of_range(value, self.upper_bound))
                }
            })
            .inspect_err(|e| {
                tracing::warn!(error = %e, "Random source failed");
            })?;
        Ok(value)
    }
}

impl Default for NumberGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl fmt::Debug for NumberGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberGenerator")
            .field("length", &self.config.length)
            .field("upper_bound", &self.upper_bound)
            .field("pad_number", &self.config.pad_number)
            .finish_non_exhaustive()
    }
}
