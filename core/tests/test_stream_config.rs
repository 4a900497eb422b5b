//! Tests for StreamConfig loading and the generator factory

use prng_core_rs::{
    Generator, GeneratorKind, Lehmer64, Prng, RngError, SplitMix64, StreamConfig,
    Xoroshiro256PlusPlus,
};

#[test]
fn test_build_each_kind_matches_direct_construction() {
    let mut sm = StreamConfig::new(GeneratorKind::SplitMix64, 42).build().unwrap();
    let mut le = StreamConfig::new(GeneratorKind::Lehmer64, 42).build().unwrap();
    let mut xo = StreamConfig::new(GeneratorKind::Xoroshiro256PlusPlus, 42)
        .build()
        .unwrap();

    let mut sm_direct = SplitMix64::new(42);
    let mut le_direct = Lehmer64::new(42);
    let mut xo_direct = Xoroshiro256PlusPlus::new(42);

    for _ in 0..20 {
        assert_eq!(sm.next_u64(), sm_direct.next());
        assert_eq!(le.next_u64(), le_direct.next());
        assert_eq!(xo.next_u64(), xo_direct.next());
    }
}

#[test]
fn test_from_json_with_jumps() {
    let config =
        StreamConfig::from_json(r#"{"kind": "xoroshiro256plusplus", "seed": 42, "jumps": 2}"#)
            .unwrap();
    let generator = config.build().unwrap();
    assert_eq!(generator.kind(), GeneratorKind::Xoroshiro256PlusPlus);

    let mut expected = Xoroshiro256PlusPlus::new(42);
    expected.jump();
    expected.jump();
    assert_eq!(generator, Generator::Xoroshiro256PlusPlus(expected));
}

#[test]
fn test_from_json_rejects_jumps_without_support() {
    let result = StreamConfig::from_json(r#"{"kind": "splitmix64", "seed": 1, "jumps": 1}"#);
    assert!(matches!(result, Err(RngError::InvalidConfig(_))));
}

#[test]
fn test_from_json_rejects_unknown_kind() {
    let result = StreamConfig::from_json(r#"{"kind": "mersenne", "seed": 1}"#);
    assert!(matches!(result, Err(RngError::Json(_))));
}

#[test]
fn test_from_json_rejects_negative_seed() {
    let result = StreamConfig::from_json(r#"{"kind": "lehmer64", "seed": -1}"#);
    assert!(matches!(result, Err(RngError::Json(_))));
}

#[test]
fn test_config_roundtrips_through_json() {
    let config = StreamConfig {
        kind: GeneratorKind::Xoroshiro256PlusPlus,
        seed: u64::MAX,
        jumps: 3,
    };
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(StreamConfig::from_json(&json).unwrap(), config);
}

#[test]
fn test_fingerprint_stable_and_distinct() {
    let a = StreamConfig::new(GeneratorKind::Lehmer64, 7);
    let b = StreamConfig::new(GeneratorKind::Lehmer64, 8);

    assert_eq!(a.fingerprint().unwrap(), a.clone().fingerprint().unwrap());
    assert_ne!(a.fingerprint().unwrap(), b.fingerprint().unwrap());
}

#[test]
fn test_default_generator_is_xoroshiro() {
    let mut generator = Generator::from_seed(42);
    assert_eq!(generator.kind(), GeneratorKind::Xoroshiro256PlusPlus);
    assert_eq!(generator.next_u64(), 0xD0764D4F4476689F);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        RngError::DegenerateState.to_string(),
        "Degenerate state: all state words are zero"
    );
    assert_eq!(
        RngError::InvalidConfig("bad".to_string()).to_string(),
        "Invalid stream config: bad"
    );
}
