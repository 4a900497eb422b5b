//! Polar (Marsaglia) method for standard normal deviates
//!
//! Draws points uniformly in the square `[-1, 1)²` until one lands strictly
//! inside the unit disk (and off the origin), then turns that single point
//! into two independent N(0, 1) deviates. The second deviate is cached and
//! handed out on the next call without touching the uniform source.
//!
//! Acceptance probability per point is π/4, so the loop is short in
//! expectation but has no hard upper bound.

/// Which half of an accepted pair the next call returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    /// No pending deviate; the next call draws a new disk point.
    #[default]
    Even,
    /// `v2` of the last accepted point has not been returned yet.
    Odd,
}

/// Cached state of the polar transform
///
/// Holds the last accepted disk point `(v1, v2)` with `s = v1² + v2²`.
/// The cache is source-agnostic: any closure yielding uniforms in `[0, 1)`
/// can drive it.
///
/// # Example
/// ```
/// use prng_core_rs::rng::PolarCache;
///
/// // Fixed source producing the point (0.5, -0.5)
/// let mut uniforms = [0.75, 0.25].into_iter();
/// let mut cache = PolarCache::new();
///
/// let x1 = cache.next_with(|| uniforms.next().unwrap());
/// let x2 = cache.next_with(|| unreachable!("second deviate comes from the cache"));
/// assert_eq!(x1, -x2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolarCache {
    v1: f64,
    v2: f64,
    s: f64,
    phase: Phase,
}

impl PolarCache {
    /// Create an empty cache (no deviate pending)
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the next call will be served from the cache
    pub fn has_pending(&self) -> bool {
        self.phase == Phase::Odd
    }

    /// Drop any pending deviate
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Produce the next standard normal deviate
    ///
    /// `uniform` must return values in `[0.0, 1.0)`. It is called an even
    /// number of times on a fresh pair and not at all when a cached deviate
    /// is pending.
    pub fn next_with<F>(&mut self, mut uniform: F) -> f64
    where
        F: FnMut() -> f64,
    {
        match self.phase {
            Phase::Even => {
                loop {
                    let u1 = uniform();
                    let u2 = uniform();
                    self.v1 = 2.0 * u1 - 1.0;
                    self.v2 = 2.0 * u2 - 1.0;
                    self.s = self.v1 * self.v1 + self.v2 * self.v2;

                    if self.s < 1.0 && self.s != 0.0 {
                        break;
                    }
                }
                self.phase = Phase::Odd;
                self.v1 * self.scale()
            }
            Phase::Odd => {
                self.phase = Phase::Even;
                self.v2 * self.scale()
            }
        }
    }

    #[inline]
    fn scale(&self) -> f64 {
        (-2.0 * self.s.ln() / self.s).sqrt()
    }
}
