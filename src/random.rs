//! The single source of randomness for a run.
//!
//! Every draw the generator and the sample selector make goes through
//! [`RandomSource`], in a fixed order, so a given seed always reproduces the
//! same dataset and the same sample ids.

use rand::distributions::Uniform;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource {
    /// Uniform integer in `lo..=hi`.
    fn int_in(&mut self, lo: i64, hi: i64) -> i64;

    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f64;
}

impl<R: Rng> RandomSource for R {
    fn int_in(&mut self, lo: i64, hi: i64) -> i64 {
        debug_assert!(lo <= hi);
        self.sample(Uniform::new_inclusive(lo, hi))
    }

    fn unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

pub fn seeded(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}
