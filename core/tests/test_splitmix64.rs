//! Tests for the SplitMix64 seeding primitive
//!
//! Reference outputs match the canonical splitmix64.c.

use prng_core_rs::{splitmix64_stateless, splitmix64_stepwise, Prng, SplitMix64};
use proptest::prelude::*;

#[test]
fn test_stateless_reference_vectors() {
    assert_eq!(splitmix64_stateless(0), 0xE220A8397B1DCDAF);
    assert_eq!(splitmix64_stateless(1), 0x910A2DEC89025CC1);
    assert_eq!(splitmix64_stateless(42), 0xBDD732262FEB6E95);
}

#[test]
fn test_stepwise_stream_from_zero() {
    let mut state = 0u64;
    let outputs: Vec<u64> = (0..5).map(|_| splitmix64_stepwise(&mut state)).collect();

    assert_eq!(
        outputs,
        vec![
            0xE220A8397B1DCDAF,
            0x6E789E6AA1B965F4,
            0x06C45D188009454F,
            0xF88BB8A8724C81EC,
            0x1B39896A51A8749B,
        ]
    );
}

#[test]
fn test_stream_struct_matches_free_function() {
    let mut state = 42u64;
    let mut stream = SplitMix64::from_seed(42);

    for _ in 0..100 {
        assert_eq!(stream.next_u64(), splitmix64_stepwise(&mut state));
    }
    assert_eq!(stream.get_state(), state);
}

proptest! {
    #[test]
    fn prop_stateless_is_pure(x in any::<u64>()) {
        prop_assert_eq!(splitmix64_stateless(x), splitmix64_stateless(x));
    }

    #[test]
    fn prop_stepwise_advances_by_golden_gamma(x in any::<u64>()) {
        let mut state = x;
        let out = splitmix64_stepwise(&mut state);
        prop_assert_eq!(state, x.wrapping_add(0x9E3779B97F4A7C15));
        prop_assert_eq!(out, splitmix64_stateless(x));
    }
}
