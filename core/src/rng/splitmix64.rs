//! SplitMix64 mixer
//!
//! Turns a 64-bit seed (or a running counter) into well-distributed 64-bit
//! words. Used to fill the state of the larger generators.
//!
//! # Algorithm
//!
//! The counter is advanced by the golden-ratio increment first, then the
//! advanced value goes through two xor-shift/multiply rounds and a final
//! xor-shift. All arithmetic wraps modulo 2^64.
//!
//! Reference: <https://prng.di.unimi.it/splitmix64.c>

use super::Prng;

/// Golden-ratio increment added to the counter on every step.
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

#[inline]
fn mix(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Advances `state` by one step and returns the mixed output.
///
/// # Example
/// ```
/// use prng_core_rs::rng::splitmix64_stepwise;
///
/// let mut state = 0;
/// assert_eq!(splitmix64_stepwise(&mut state), 0xE220A8397B1DCDAF);
/// assert_eq!(splitmix64_stepwise(&mut state), 0x6E789E6AA1B965F4);
/// assert_eq!(state, 0x9E3779B97F4A7C15u64.wrapping_mul(2));
/// ```
#[inline]
pub fn splitmix64_stepwise(state: &mut u64) -> u64 {
    *state = state.wrapping_add(GOLDEN_GAMMA);
    mix(*state)
}

/// Single SplitMix64 step from `x`, without keeping any state.
///
/// Equivalent to one [`splitmix64_stepwise`] call on a counter holding `x`.
///
/// # Example
/// ```
/// use prng_core_rs::rng::splitmix64_stateless;
///
/// assert_eq!(splitmix64_stateless(0), 0xE220A8397B1DCDAF);
/// assert_eq!(splitmix64_stateless(1), 0x910A2DEC89025CC1);
/// ```
#[inline]
pub fn splitmix64_stateless(x: u64) -> u64 {
    mix(x.wrapping_add(GOLDEN_GAMMA))
}

/// SplitMix64 driven as a stream over an owned counter.
///
/// Seeding `Xoroshiro256PlusPlus` with `s` consumes exactly the first four
/// words of `SplitMix64::new(s)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitMix64 {
    /// Running counter (the value *before* the next increment)
    state: u64,
}

impl SplitMix64 {
    /// Create a stream whose counter starts at `seed`
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Generate the next mixed word
    #[inline]
    pub fn next(&mut self) -> u64 {
        splitmix64_stepwise(&mut self.state)
    }

    /// Get the current counter value
    ///
    /// `SplitMix64::new(stream.get_state())` continues the same sequence.
    pub fn get_state(&self) -> u64 {
        self.state
    }
}

impl Prng for SplitMix64 {
    fn from_seed(seed: u64) -> Self {
        Self::new(seed)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.next()
    }
}
