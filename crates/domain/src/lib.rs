//! SimpleRNG Domain - value objects and invariants for fixed-digit number generation.
//!
//! Nothing in this crate touches a random source. Drawing values is the job of
//! `simplerng-engine`, which feeds the draws back through [`pad`].

pub mod error;
pub mod value_objects;

pub use error::{GeneratorError, LengthError};

pub use value_objects::{
    pad, DigitLength, GeneratedNumber, GeneratorConfig, DEFAULT_DIGIT_LENGTH, DEFAULT_PAD_NUMBER,
    MAX_DIGIT_LENGTH, MIN_DIGIT_LENGTH,
};
