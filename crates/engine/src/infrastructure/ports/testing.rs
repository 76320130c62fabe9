//! Testability port for injecting randomness.

use super::RandomError;

// =============================================================================
// Testability Ports
// =============================================================================

/// Source of uniformly distributed integers.
///
/// Implementations must be safe to share across threads; the number
/// generator holds one behind an `Arc` and never synchronises around it.
///
/// - `SystemRandom` (production, `rand::thread_rng()`)
/// - `SeededRandom` (reproducible sequences)
/// - `FixedRandom` / `MockRandomPort` (testing)
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait RandomPort: Send + Sync {
    /// Draw a value uniformly from `[0, upper_bound)`. `upper_bound` is never zero.
    fn gen_below(&self, upper_bound: u64) -> Result<u64, RandomError>;
}
