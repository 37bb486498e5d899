//! Deterministic simulation RNG.
//!
//! The engine has a single agent and a single thread of control, so one
//! seeded `SmallRng` drives every random decision (initial heading, bounce
//! noise).  The same seed always reproduces the same run.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simulation-level RNG.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset, e.g. for a map
    /// generator that must not disturb the engine's stream.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Uniform sample in `[-bound, bound]`; exactly `0.0` when `bound` is not
    /// positive.
    #[inline]
    pub fn symmetric(&mut self, bound: f32) -> f32 {
        if bound > 0.0 {
            self.0.gen_range(-bound..=bound)
        } else {
            0.0
        }
    }

    /// Uniform angle in `[0, 2π)`.
    #[inline]
    pub fn heading(&mut self) -> f32 {
        self.0.gen_range(0.0..std::f32::consts::TAU)
    }
}
