//! Port traits for infrastructure boundaries.
//!
//! The random source is the only external dependency of number generation,
//! so it is the only port. It exists so tests can pin the drawn values.

mod error;
mod testing;

pub use error::RandomError;
pub use testing::RandomPort;

#[cfg(any(test, feature = "testing"))]
pub use testing::MockRandomPort;
