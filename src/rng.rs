use getrandom::getrandom;
use oorandom::{Rand32, Rand64};
use tracing::warn;

/// The two draws the generators need from a random number generator.
///
/// Seeding is left to the caller.
pub trait RandomSource {
    /// Returns an integer drawn uniformly from `0..bound`. `bound` must be positive.
    fn next_index(&mut self, bound: usize) -> usize;

    /// Returns a real drawn uniformly from `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl RandomSource for Rand64 {
    fn next_index(&mut self, bound: usize) -> usize {
        self.rand_range(0..bound as u64) as usize
    }

    fn next_unit(&mut self) -> f64 {
        self.rand_float()
    }
}

impl RandomSource for Rand32 {
    fn next_index(&mut self, bound: usize) -> usize {
        self.rand_range(0..bound as u32) as usize
    }

    fn next_unit(&mut self) -> f64 {
        f64::from(self.rand_float())
    }
}

pub fn preseeded_rng64() -> Rand64 {
    Rand64::new(os_random_seed())
}

pub fn rng64(seed: u128) -> Rand64 {
    Rand64::new(seed)
}

/// Reads a seed from the operating system. Falls back to zero if no entropy is available.
pub fn os_random_seed() -> u128 {
    let mut buf = [0; 16];
    if let Err(err) = getrandom(&mut buf) {
        warn!(%err, "os entropy unavailable, seeding with zero");
    }
    u128::from_le_bytes(buf)
}
