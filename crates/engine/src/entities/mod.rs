//! Entity modules - operations wrapping domain value objects.

mod number_generator;

pub use number_generator::NumberGenerator;
