//! Randomness used by the generator.
//!
//! The generator never reaches for a global RNG. Callers hand it a
//! [`RandomSource`], which makes runs reproducible in tests.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Source of uniform draws and shuffles.
pub trait RandomSource {
    /// Uniform integer in `0..upper`. `upper` is never zero.
    fn uniform(&mut self, upper: usize) -> usize;

    /// Uniform permutation of `items` in place.
    fn shuffle(&mut self, items: &mut [char]);
}

/// Pseudo-random source backed by [`StdRng`]. Not meant for key material.
pub struct SeededRng {
    inner: StdRng,
}

impl SeededRng {
    /// Seed from the wall clock's nanoseconds. Called once per process.
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::from_seed(nanos)
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRng {
    fn uniform(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..upper)
    }

    fn shuffle(&mut self, items: &mut [char]) {
        items.shuffle(&mut self.inner);
    }
}
