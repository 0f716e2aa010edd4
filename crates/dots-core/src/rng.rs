//! The run's single seeded random stream.
//!
//! # Determinism strategy
//!
//! The simulator owns exactly one `SimRng`, seeded once at construction.
//! Dots are updated in ascending id order and every draw happens at a fixed
//! point of the per-dot update, so a seed plus an initial population fully
//! determines a run.  The generator is an owned value rather than process
//! state: independent simulators never disturb each other's sequences.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::sampler::sample_index;

/// Simulation-level RNG.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// A uniform variate in `(0, 1]`.
    ///
    /// Excluding zero means a state with zero mass at the front of a CDF can
    /// never be selected.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        1.0 - self.0.r#gen::<f64>()
    }

    /// Draw one outcome index from `cdf` (see [`sample_index`]).
    #[inline]
    pub fn sample(&mut self, cdf: &[f64]) -> usize {
        sample_index(cdf, self.unit())
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability one half.
    #[inline]
    pub fn coin(&mut self) -> bool {
        self.0.r#gen()
    }
}
