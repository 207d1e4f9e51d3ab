//! Injectable randomness for scoring and content selection
//!
//! Nothing in the services layer touches a global RNG. Every draw goes
//! through [`RandomSource`] so callers can seed it and tests can script it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed integers
pub trait RandomSource {
    /// Uniform integer in `lo..=hi`. Returns `lo` when the range is empty.
    fn next_in_range(&mut self, lo: u32, hi: u32) -> u32;
}

/// Adapter from any `rand` generator to [`RandomSource`]
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Reproducible source (same seed, same draws)
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from the operating system
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Seeded when a seed is given, OS-seeded otherwise
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_os_rng(),
        }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_in_range(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            return lo;
        }
        self.rng.random_range(lo..=hi)
    }
}

/// Pick an index into a collection of `len` items
/// Returns None for an empty collection
pub fn pick_index<S: RandomSource + ?Sized>(source: &mut S, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let hi = u32::try_from(len - 1).unwrap_or(u32::MAX);
    let index = source.next_in_range(0, hi) as usize;
    Some(index.min(len - 1))
}
