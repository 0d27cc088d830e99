//! Per-overlay pseudo-random stream
//!
//! Every styling call builds its own selector seeded from the overlay's raw
//! `origin` string, so restyling an unchanged map reproduces the same output.

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Stable 64-bit FNV-1a hash used to turn seed text into a numeric seed
pub fn seed_from_text(text: &str) -> u64 {
    text.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Seeded random selector for reproducible stochastic choices
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a selector seeded from an overlay's origin text
    pub fn from_origin(origin: &str) -> Self {
        Self::new(seed_from_text(origin))
    }

    /// Weighted coin flip succeeding with `percent` chance
    ///
    /// Draws a whole number below 100 and compares it to `percent`, so zero
    /// never succeeds and 100 or more always does.
    pub fn chance(&mut self, percent: f64) -> bool {
        f64::from(self.rng.random_range(0..100_u8)) < percent
    }

    /// Uniformly choose one item, `None` when `items` is empty
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }
}
