//! Deterministic randomness handle for fixture generation.
//!
//! Wraps a seeded [`StdRng`] behind the small draw surface the fixture
//! generators need. There is deliberately no process-global generator:
//! each test or benchmark context owns its own seeded instance, which
//! makes runs reproducible and parallel use safe by construction.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A deterministically seeded random number generator.
///
/// Not thread-safe; give each concurrent context its own instance.
#[derive(Debug)]
pub struct DeterministicRng {
    rng: StdRng,
}

impl DeterministicRng {
    /// Create with a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Reset the generator state from the given seed, detaching this
    /// instance's stream from whatever was drawn before.
    pub fn reset(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Uniformly distributed 64-bit unsigned integer.
    pub fn rand_u64(&mut self) -> u64 {
        self.rng.random()
    }

    /// Uniformly distributed 32-bit unsigned integer.
    pub fn rand_u32(&mut self) -> u32 {
        self.rng.random()
    }

    /// Uniformly distributed `f64` in `[0, 1)`.
    pub fn rand_f64(&mut self) -> f64 {
        self.rng.random()
    }

    /// Uniformly distributed integer in `[0, n)`.
    ///
    /// REQUIRES: `n >= 1`.
    pub fn uniform(&mut self, n: u32) -> u32 {
        self.rng.random_range(0..n)
    }

    /// Uniformly distributed `f64` in `[min, limit)`.
    pub fn uniform_f64(&mut self, min: f64, limit: f64) -> f64 {
        self.rng.random_range(min..limit)
    }

    /// True with probability `1/n`.
    ///
    /// REQUIRES: `n >= 1` (so `one_in(1)` is always true).
    pub fn one_in(&mut self, n: u32) -> bool {
        self.uniform(n) == 0
    }

    /// Pick `base` uniformly from `[0, max_log]` and return `base` random
    /// bits: a number in `[0, 2^max_log)` biased towards smaller values.
    ///
    /// REQUIRES: `max_log <= 31`.
    pub fn skewed(&mut self, max_log: u32) -> u32 {
        let base = self.uniform(max_log + 1);
        let mask = ((1u64 << base) - 1) as u32;
        self.rand_u32() & mask
    }
}
