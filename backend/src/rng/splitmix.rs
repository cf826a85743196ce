//! SplitMix64 seed expander
//!
//! Turns a single 64-bit seed into an arbitrarily long stream of
//! well-mixed 64-bit words. Its only job in this crate is initializing the
//! state of other generators; it is never used as the primary output source.
//!
//! # Algorithm
//!
//! Each call advances a 64-bit accumulator by the golden-ratio increment
//! `0x9e3779b97f4a7c15` and passes the result through a fixed finalizer:
//! two rounds of xor-shift-right followed by multiplication by an odd
//! constant, then a last xor-shift-right. All arithmetic wraps modulo 2^64.

/// SplitMix64 generator.
///
/// Any seed is accepted, zero included.
///
/// # Example
/// ```
/// use prng_core_rs::SplitMix64;
///
/// let mut sm = SplitMix64::new(0);
/// assert_eq!(sm.next(), 0xe220a8397b1dcdaf);
/// ```
#[derive(Debug, Clone)]
pub struct SplitMix64 {
    /// Running accumulator
    state: u64,
}

impl SplitMix64 {
    /// Create an expander from `seed`
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advance the accumulator and return the next mixed word
    ///
    /// There is no peek: every call mutates the state.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }
}
