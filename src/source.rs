//! Injectable pseudo-random integer source.
//!
//! The generator draws non-negative integers in the classic `0..=RAND_MAX`
//! range. Normal runs wrap a `rand` generator; tests substitute their own
//! deterministic implementation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Largest value a [`RandomSource`] may return.
pub const RAND_MAX: u32 = 2_147_483_647;

/// A source of non-negative pseudo-random integers.
pub trait RandomSource {
    /// Draw the next integer in `0..=RAND_MAX`.
    fn draw(&mut self) -> u32;
}

/// [`RandomSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct StdSource<R> {
    rng: R,
}

impl<R: Rng> StdSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl StdSource<StdRng> {
    /// Reproducible source: the same seed always yields the same draws.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSource for StdSource<R> {
    fn draw(&mut self) -> u32 {
        self.rng.gen_range(0..=RAND_MAX)
    }
}
