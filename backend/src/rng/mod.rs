//! Deterministic random number generation
//!
//! - [`SplitMix64`]: seed expander, used to initialize other generators
//! - [`XorShift128Plus`]: the core 64-bit generator
//! - [`to_f64`] / [`to_f32`]: raw word → uniform float in [0.0, 1.0)
//! - [`RawGenerator`]: sampling interface over `rand_core::RngCore`,
//!   implemented by XorShift128+ and by the 32-bit baselines `Pcg32` and
//!   `ChaCha8Rng`
//!
//! SplitMix64 and XorShift128+ are not cryptographically secure. Each
//! instance is an explicitly constructed, single-owner value; there is no
//! global RNG.

mod baseline;
mod generator;
mod splitmix;
mod uniform;
mod xorshift;

pub use generator::RawGenerator;
pub use splitmix::SplitMix64;
pub use uniform::{to_f32, to_f64, MAX_F32_SHIFT};
pub use xorshift::XorShift128Plus;
