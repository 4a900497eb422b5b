/// Scale factor mapping a 53-bit integer onto `[0.0, 1.0)`: 2^-53.
const INV_2_POW_53: f64 = 1.0 / (1u64 << 53) as f64;

/// Converts a raw 64-bit word into a double in `[0.0, 1.0)`.
///
/// Keeps the top 53 bits (the width of an IEEE-754 double mantissa), so every
/// result is exactly representable and `1.0` is never reached.
///
/// # Example
/// ```
/// use prng_core_rs::rng::to_unit_interval;
///
/// assert_eq!(to_unit_interval(0), 0.0);
/// assert!(to_unit_interval(u64::MAX) < 1.0);
/// ```
#[inline]
pub fn to_unit_interval(x: u64) -> f64 {
    (x >> 11) as f64 * INV_2_POW_53
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extremes() {
        assert_eq!(to_unit_interval(0), 0.0);
        assert_eq!(to_unit_interval(u64::MAX), 1.0 - INV_2_POW_53);
    }

    #[test]
    fn test_low_bits_are_discarded() {
        assert_eq!(to_unit_interval(0x7FF), 0.0);
        assert_eq!(to_unit_interval(0x800), INV_2_POW_53);
    }

    #[test]
    fn test_top_bit_is_one_half() {
        assert_eq!(to_unit_interval(1 << 63), 0.5);
    }
}
