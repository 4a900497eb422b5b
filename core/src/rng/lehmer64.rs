//! Lehmer64 multiplicative generator
//!
//! 128-bit state multiplied by a fixed 64-bit constant on every step; the
//! output is the high half of the product.
//!
//! # Seeding
//!
//! The high and low halves of the state come from two consecutive stateless
//! SplitMix64 outputs, for `seed` and `seed + 1`.

use super::splitmix64::splitmix64_stateless;
use super::Prng;
use crate::error::RngError;

/// Fixed multiplier; changing it breaks compatibility with reference sequences.
const MULTIPLIER: u128 = 0xDA94_2042_E4DD_58B5;

/// Multiplicative congruential generator with 128-bit state
///
/// # Example
/// ```
/// use prng_core_rs::rng::Lehmer64;
///
/// let mut rng = Lehmer64::new(42);
/// assert_eq!(rng.next(), 0xB7DBD4CC19CC230A);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lehmer64 {
    state: u128,
}

impl Lehmer64 {
    /// Create a new generator from a 64-bit seed
    pub fn new(seed: u64) -> Self {
        let high = splitmix64_stateless(seed) as u128;
        let low = splitmix64_stateless(seed.wrapping_add(1)) as u128;
        let state = (high << 64) | low;
        tracing::trace!(seed, "seeded lehmer64");
        Self { state }
    }

    /// Restore a generator from a previously captured state
    ///
    /// # Errors
    /// Returns [`RngError::DegenerateState`] for a zero state, which the
    /// multiplication can never leave.
    pub fn from_state(state: u128) -> Result<Self, RngError> {
        if state == 0 {
            return Err(RngError::DegenerateState);
        }
        tracing::debug!("restored lehmer64 from raw state");
        Ok(Self { state })
    }

    /// Generate next random u64 value
    #[inline]
    pub fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(MULTIPLIER);
        (self.state >> 64) as u64
    }

    /// Get current 128-bit state
    pub fn state(&self) -> u128 {
        self.state
    }
}

impl Prng for Lehmer64 {
    fn from_seed(seed: u64) -> Self {
        Self::new(seed)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.next()
    }
}
