//! xoroshiro256++ generator
//!
//! All-purpose 256-bit xor/shift/rotate generator (xoshiro256++ 1.0 by
//! Blackman and Vigna) with uniform-double and Gaussian outputs layered on
//! top.
//!
//! # Seeding
//!
//! The four state words are four successive outputs of a SplitMix64 stream
//! started at the seed. The state must never be all zero; SplitMix64 output
//! makes that practically impossible and [`Xoroshiro256PlusPlus::from_state`]
//! refuses it outright.
//!
//! # Parallel streams
//!
//! [`jump`](Xoroshiro256PlusPlus::jump) advances by 2^128 draws and
//! [`long_jump`](Xoroshiro256PlusPlus::long_jump) by 2^192, so clones
//! separated by jumps never overlap in practice.
//!
//! Reference: <https://prng.di.unimi.it/xoshiro256plusplus.c>

use super::gaussian::PolarCache;
use super::splitmix64::splitmix64_stepwise;
use super::uniform::to_unit_interval;
use super::Prng;
use crate::error::RngError;

const JUMP: [u64; 4] = [
    0x180e_c6d3_3cfd_0aba,
    0xd5a6_1266_f0c9_392c,
    0xa958_2618_e03f_c9aa,
    0x39ab_dc45_29b1_661c,
];

const LONG_JUMP: [u64; 4] = [
    0x76e1_5d3e_fefd_cbbf,
    0xc500_4e44_1c52_2fb3,
    0x7771_0069_854e_e241,
    0x3910_9bb0_2acb_e635,
];

#[inline(always)]
fn rotl(x: u64, k: u32) -> u64 {
    (x << k) | (x >> (64 - k))
}

/// One step of the recurrence over `s`, returning the output word.
#[inline]
fn step(s: &mut [u64; 4]) -> u64 {
    let result = rotl(s[0].wrapping_add(s[3]), 23).wrapping_add(s[0]);
    let t = s[1] << 17;

    s[2] ^= s[0];
    s[3] ^= s[1];
    s[1] ^= s[2];
    s[0] ^= s[3];

    s[2] ^= t;
    s[3] = rotl(s[3], 45);

    result
}

/// xoroshiro256++ with a per-instance Gaussian cache
///
/// # Example
/// ```
/// use prng_core_rs::rng::Xoroshiro256PlusPlus;
///
/// let mut rng = Xoroshiro256PlusPlus::new(42);
/// assert_eq!(rng.next(), 0xD0764D4F4476689F);
///
/// let u = rng.next_uniform();
/// assert!((0.0..1.0).contains(&u));
///
/// let z = rng.next_gaussian();
/// assert!(z.is_finite());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Xoroshiro256PlusPlus {
    /// Ordered state words `s0..s3`
    s: [u64; 4],
    /// Pending second deviate of the polar transform
    polar: PolarCache,
}

impl Xoroshiro256PlusPlus {
    /// Create a new generator from a 64-bit seed
    pub fn new(seed: u64) -> Self {
        let mut counter = seed;
        let s = [
            splitmix64_stepwise(&mut counter),
            splitmix64_stepwise(&mut counter),
            splitmix64_stepwise(&mut counter),
            splitmix64_stepwise(&mut counter),
        ];
        tracing::trace!(seed, "seeded xoroshiro256++");

        Self {
            s,
            polar: PolarCache::new(),
        }
    }

    /// Restore a generator from previously captured state words
    ///
    /// The Gaussian cache starts empty.
    ///
    /// # Errors
    /// Returns [`RngError::DegenerateState`] if every word is zero.
    pub fn from_state(s: [u64; 4]) -> Result<Self, RngError> {
        if s.iter().all(|&word| word == 0) {
            return Err(RngError::DegenerateState);
        }
        tracing::debug!("restored xoroshiro256++ from raw state");

        Ok(Self {
            s,
            polar: PolarCache::new(),
        })
    }

    /// Get the current state words `[s0, s1, s2, s3]`
    pub fn state(&self) -> [u64; 4] {
        self.s
    }

    /// Generate next random u64 value
    #[inline]
    pub fn next(&mut self) -> u64 {
        step(&mut self.s)
    }

    /// Generate random f64 in range [0.0, 1.0)
    #[inline]
    pub fn next_uniform(&mut self) -> f64 {
        to_unit_interval(self.next())
    }

    /// Generate a standard normal deviate (mean 0, variance 1)
    ///
    /// Every other call is answered from the cached half of the previous
    /// accepted pair and does not advance the integer state.
    pub fn next_gaussian(&mut self) -> f64 {
        let Self { s, polar } = self;
        polar.next_with(|| to_unit_interval(step(s)))
    }

    /// Generate a normal deviate with the given mean and standard deviation
    pub fn next_normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        mean + std_dev * self.next_gaussian()
    }

    /// Whether the next [`next_gaussian`](Self::next_gaussian) call is served from the cache
    pub fn has_pending_gaussian(&self) -> bool {
        self.polar.has_pending()
    }

    /// Advance the state by 2^128 calls to [`next`](Self::next)
    ///
    /// Gives 2^128 non-overlapping subsequences for parallel use. Any pending
    /// Gaussian deviate is kept.
    pub fn jump(&mut self) {
        self.apply_jump(&JUMP);
        tracing::trace!("xoroshiro256++ jumped 2^128 steps");
    }

    /// Advance the state by 2^192 calls to [`next`](Self::next)
    pub fn long_jump(&mut self) {
        self.apply_jump(&LONG_JUMP);
        tracing::trace!("xoroshiro256++ jumped 2^192 steps");
    }

    fn apply_jump(&mut self, polynomial: &[u64; 4]) {
        let mut acc = [0u64; 4];

        for &word in polynomial {
            for bit in 0..64 {
                if word & (1u64 << bit) != 0 {
                    for (a, s) in acc.iter_mut().zip(self.s) {
                        *a ^= s;
                    }
                }
                step(&mut self.s);
            }
        }

        self.s = acc;
    }
}

impl Prng for Xoroshiro256PlusPlus {
    fn from_seed(seed: u64) -> Self {
        Self::new(seed)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.next()
    }
}
