//! Deterministic random number generation
//!
//! Seeded PRNG primitives: SplitMix64 for seeding, Lehmer64 and xoroshiro256++
//! as general-purpose generators, plus the uniform and Gaussian transforms built
//! on top of xoroshiro256++.
//!
//! CRITICAL: Every generator owns its state. Two instances built from the same
//! seed produce the same sequence; nothing is shared between instances.

mod gaussian;
mod lehmer64;
mod splitmix64;
mod uniform;
mod xoroshiro256pp;

pub use gaussian::PolarCache;
pub use lehmer64::Lehmer64;
pub use splitmix64::{splitmix64_stateless, splitmix64_stepwise, SplitMix64};
pub use uniform::to_unit_interval;
pub use xoroshiro256pp::Xoroshiro256PlusPlus;

/// A seeded pseudo-random number generator.
///
/// Implementors only provide seeding and the raw 64-bit output; the
/// floating-point and bounded-integer helpers are derived from `next_u64`.
///
/// # Example
/// ```
/// use prng_core_rs::rng::{Lehmer64, Prng, Xoroshiro256PlusPlus};
///
/// fn first_word<R: Prng>(seed: u64) -> u64 {
///     R::from_seed(seed).next_u64()
/// }
///
/// assert_eq!(first_word::<Xoroshiro256PlusPlus>(42), 0xD0764D4F4476689F);
/// assert_eq!(first_word::<Lehmer64>(42), 0xB7DBD4CC19CC230A);
/// ```
pub trait Prng {
    /// Creates a generator from a 64-bit seed.
    fn from_seed(seed: u64) -> Self
    where
        Self: Sized;

    /// Advances the state and returns the next 64-bit word.
    fn next_u64(&mut self) -> u64;

    /// Generates a random `f64` in `[0.0, 1.0)` with 53 bits of precision.
    #[inline]
    fn next_f64(&mut self) -> f64 {
        to_unit_interval(self.next_u64())
    }

    /// Generate random value in range [min, max)
    ///
    /// Uses a plain modulo reduction, so very wide ranges carry a slight bias
    /// toward low values.
    ///
    /// # Panics
    /// Panics if min >= max
    fn range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min < max, "min must be less than max");

        let span = max.wrapping_sub(min) as u64;
        min.wrapping_add((self.next_u64() % span) as i64)
    }
}
