//! Common interface for raw bit generators
//!
//! [`RawGenerator`] extends [`RngCore`] with the facts a sampler needs about
//! a generator: how wide its native output word is, how big its state is,
//! and which shift suits it for single-precision conversion.

use rand_core::RngCore;

use super::uniform::{to_f32, to_f64};

/// A stateful source of raw pseudorandom words.
///
/// Implementors provide [`next_raw`](RawGenerator::next_raw), one native
/// output word widened to `u64`; the float samplers are derived from it
/// through the uniform conversion functions.
///
/// # Example
/// ```
/// use prng_core_rs::{RawGenerator, XorShift128Plus};
///
/// fn mean<G: RawGenerator>(rng: &mut G, n: usize) -> f64 {
///     (0..n).map(|_| rng.next_f64()).sum::<f64>() / n as f64
/// }
///
/// let mut rng = XorShift128Plus::new(20260224);
/// let m = mean(&mut rng, 10_000);
/// assert!(m > 0.45 && m < 0.55);
/// ```
pub trait RawGenerator: RngCore {
    /// Short lowercase name used in reports
    const NAME: &'static str;

    /// Size of the generator's internal state in bytes
    const STATE_BYTES: usize;

    /// Size of one native output word in bytes (4 or 8)
    const RESULT_BYTES: usize;

    /// Shift that keeps the strongest 24 bits of a native word
    const DEFAULT_F32_SHIFT: u8;

    /// Produce one native output word, zero-extended to `u64`
    fn next_raw(&mut self) -> u64;

    /// Produce an `f64` in [0.0, 1.0) from the next raw word
    ///
    /// A 32-bit generator only fills the low 32 of the 53 mantissa bits.
    #[inline]
    fn next_f64(&mut self) -> f64 {
        to_f64(self.next_raw())
    }

    /// Produce an `f32` in [0.0, 1.0) from the next raw word
    ///
    /// `shift` is the number of low bits to discard; pick it for the
    /// generator's bit-quality profile.
    #[inline]
    fn next_f32(&mut self, shift: u8) -> f32 {
        to_f32(self.next_raw(), shift)
    }
}
