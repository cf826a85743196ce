//! PRNG Core - Rust Engine
//!
//! Small, reproducible pseudorandom bit generators and the conversions that
//! turn their raw output into uniform floating-point samples.
//!
//! # Architecture
//!
//! - **rng**: SplitMix64 seed expander, XorShift128+ core generator, the
//!   uniform conversion layer and the `RawGenerator` sampling trait
//!
//! # Critical Invariants
//!
//! 1. Same seed → same output sequence on every platform
//! 2. All arithmetic is unsigned 64-bit with wraparound
//! 3. Generator state is touched only by the generator's own step

pub mod rng;

// Re-exports for convenience
pub use rng::{to_f32, to_f64, RawGenerator, SplitMix64, XorShift128Plus, MAX_F32_SHIFT};

// Baseline generators and the traits callers need to drive them
pub use rand_chacha::ChaCha8Rng;
pub use rand_core::{RngCore, SeedableRng};
pub use rand_pcg::Pcg32;
