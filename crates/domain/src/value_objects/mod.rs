//! Value objects - Immutable objects defined by their attributes

mod digit_length;
mod generated_number;
mod generator_config;

pub use digit_length::{DigitLength, DEFAULT_DIGIT_LENGTH, MAX_DIGIT_LENGTH, MIN_DIGIT_LENGTH};
pub use generated_number::{pad, GeneratedNumber};
pub use generator_config::{GeneratorConfig, DEFAULT_PAD_NUMBER};
