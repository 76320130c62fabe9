//! SimpleRNG Engine library.
//!
//! Generates uniformly distributed fixed-digit numbers, optionally left-padded
//! with zeros to an exact width.
//!
//! ## Structure
//!
//! - `entities/` - `NumberGenerator`, wrapping the domain value objects
//! - `infrastructure/` - the random source port and its implementations
//!
//! ```
//! use simplerng_engine::NumberGenerator;
//!
//! let generator = NumberGenerator::create(4, true)?;
//! let code = generator.generate()?;
//! assert_eq!(code.to_string().len(), 4);
//! # Ok::<(), simplerng_engine::GeneratorError>(())
//! ```

pub mod entities;
pub mod infrastructure;

pub use entities::NumberGenerator;
pub use infrastructure::ports::{RandomError, RandomPort};
pub use infrastructure::random::{FixedRandom, SeededRandom, SystemRandom};

pub use simplerng_domain::{DigitLength, GeneratedNumber, GeneratorConfig, GeneratorError, LengthError};
