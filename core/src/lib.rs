//! PRNG Core - Seeded Random Number Primitives
//!
//! Small, bit-exact pseudo-random generators used as the foundation for
//! stochastic simulation code.
//!
//! # Architecture
//!
//! - **rng**: Generators (SplitMix64, Lehmer64, xoroshiro256++) and transforms
//!   (uniform double, polar Gaussian)
//! - **config**: Serializable stream descriptions and the generator factory
//! - **error**: Errors for state restoration and config loading
//!
//! # Critical Invariants
//!
//! 1. Same seed → same sequence, on every platform
//! 2. Generator state is per instance; there is no global generator
//! 3. No internal locking: share an instance across threads only behind your
//!    own synchronization, or give each thread its own (jumped) stream

// Module declarations
pub mod config;
pub mod error;
pub mod rng;

// Re-exports for convenience
pub use config::{Generator, GeneratorKind, StreamConfig};
pub use error::RngError;
pub use rng::{
    splitmix64_stateless, splitmix64_stepwise, to_unit_interval, Lehmer64, PolarCache, Prng,
    SplitMix64, Xoroshiro256PlusPlus,
};
