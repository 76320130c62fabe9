//! Random source implementations.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};

use crate::infrastructure::ports::{RandomError, RandomPort};

/// System random - thread-local `rand::thread_rng()`.
///
/// Each calling thread draws from its own generator, so sharing one
/// `SystemRandom` across threads needs no locking.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl RandomPort for SystemRandom {
    fn gen_below(&self, upper_bound: u64) -> Result<u64, RandomError> {
        if upper_bound == 0 {
            return Err(RandomError::EmptyRange);
        }
        Ok(rand::thread_rng().gen_range(0..upper_bound))
    }
}

/// Seeded random - reproducible sequences from a `StdRng`.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    /// Same seed, same sequence of draws.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Seed from the operating system's entropy source.
    pub fn from_entropy() -> Result<Self, RandomError> {
        let rng = StdRng::from_rng(OsRng).map_err(|e| RandomError::unavailable("OsRng", e))?;
        Ok(Self {
            rng: Mutex::new(rng),
        })
    }
}

impl RandomPort for SeededRandom {
    fn gen_below(&self, upper_bound: u64) -> Result<u64, RandomError> {
        if upper_bound == 0 {
            return Err(RandomError::EmptyRange);
        }
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| RandomError::unavailable("SeededRandom", e))?;
        Ok(rng.gen_range(0..upper_bound))
    }
}

/// Fixed random for deterministic testing.
///
/// Returns values from the given sequence, cycling when exhausted. Values are
/// returned as-is, out-of-range ones included, so callers' range checks can
/// be exercised too.
#[derive(Debug)]
pub struct FixedRandom {
    values: Vec<u64>,
    index: AtomicUsize,
}

impl FixedRandom {
    pub fn new(values: Vec<u64>) -> Self {
        Self {
            values,
            index: AtomicUsize::new(0),
        }
    }

    /// Always returns the same value.
    pub fn constant(value: u64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomPort for FixedRandom {
    fn gen_below(&self, upper_bound: u64) -> Result<u64, RandomError> {
        if upper_bound == 0 {
            return Err(RandomError::EmptyRange);
        }
        if self.values.is_empty() {
            return Err(RandomError::unavailable("FixedRandom", "no values configured"));
        }
        let idx = self.index.fetch_add(1, Ordering::SeqCst);
        Ok(self.values[idx % self.values.len()])
    }
}
