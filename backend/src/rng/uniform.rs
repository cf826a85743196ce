//! Uniform conversion of raw samples to floating point
//!
//! Both functions are pure: they take an already-produced raw word and map
//! it onto an equally spaced grid inside [0.0, 1.0). The grid has exactly
//! as many points as the target type has mantissa bits, so every output is
//! exactly representable.

/// Largest shift that still leaves 24 meaningful bits in a 64-bit raw word
pub const MAX_F32_SHIFT: u8 = 40;

/// Convert a raw 64-bit sample to an `f64` in [0.0, 1.0)
///
/// Keeps the low 53 bits and divides by 2^53, giving one of 2^53 equally
/// spaced values.
///
/// # Example
/// ```
/// use prng_core_rs::to_f64;
///
/// assert_eq!(to_f64(0), 0.0);
/// assert_eq!(to_f64(1 << 52), 0.5);
/// assert!(to_f64(u64::MAX) < 1.0);
/// ```
#[inline]
pub fn to_f64(raw: u64) -> f64 {
    let mantissa = raw & ((1u64 << 53) - 1);
    mantissa as f64 / (1u64 << 53) as f64
}

/// Convert a raw 64-bit sample to an `f32` in [0.0, 1.0)
///
/// Discards the low `shift` bits, keeps the next 24 and divides by 2^24,
/// giving one of 2^24 equally spaced values.
///
/// The shift should skip the weak low bits of the generator that produced
/// `raw`: 8 suits a 32-bit-oriented generator, 40 takes the top 24 bits of
/// a 64-bit word such as XorShift128+. Shifts of 64 or more leave no bits
/// and return 0.0.
///
/// # Example
/// ```
/// use prng_core_rs::to_f32;
///
/// assert_eq!(to_f32(0x8000_0000_0000_0000, 40), 0.5);
/// assert_eq!(to_f32(0xff, 8), 0.0);
/// ```
#[inline]
pub fn to_f32(raw: u64, shift: u8) -> f32 {
    let shifted = raw.checked_shr(u32::from(shift)).unwrap_or(0);
    let mantissa = (shifted & ((1u64 << 24) - 1)) as u32;
    mantissa as f32 / (1u32 << 24) as f32
}
