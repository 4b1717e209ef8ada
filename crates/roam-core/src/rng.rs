//! Session-level RNG wrapper.
//!
//! # Determinism strategy
//!
//! A session owns exactly one `SessionRng`.  Interactive runs seed it from OS
//! entropy; tests and reproducible demos pass an explicit seed.  Worker
//! threads that need their own stream derive one with [`SessionRng::child`]
//! so no RNG state is ever shared.
//!
//! The sampling code only asks for [`SessionRng::unit`], a uniform draw in
//! `[0, 1)`. That keeps the distance/bearing formulas independent of the
//! generator behind them.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// The random source owned by one explorer session.
///
/// Not `Sync`: hand each thread its own child stream instead of sharing.
pub struct SessionRng(SmallRng);

impl SessionRng {
    /// Seed deterministically.
    pub fn new(seed: u64) -> Self {
        SessionRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from operating-system entropy.
    pub fn from_entropy() -> Self {
        SessionRng(SmallRng::from_entropy())
    }

    /// `new(seed)` when a seed is configured, otherwise `from_entropy()`.
    pub fn from_seed_opt(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::new)
    }

    /// Derive an independent child stream, e.g. one per worker thread.
    pub fn child(&mut self, offset: u64) -> SessionRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SessionRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Uniform `f64` in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a non-empty slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}

impl std::fmt::Debug for SessionRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionRng(..)")
    }
}
