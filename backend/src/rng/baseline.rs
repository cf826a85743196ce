//! 32-bit baseline generators
//!
//! Established generators from the `rand` ecosystem that XorShift128+ is
//! compared against in the bench and the sampler. Both produce 32-bit
//! native words, so their raw sample is `next_u32` zero-extended and their
//! single-precision shift is 8.

use rand_chacha::ChaCha8Rng;
use rand_core::RngCore;
use rand_pcg::Pcg32;

use super::generator::RawGenerator;

impl RawGenerator for Pcg32 {
    const NAME: &'static str = "pcg32";
    const STATE_BYTES: usize = std::mem::size_of::<Self>();
    const RESULT_BYTES: usize = std::mem::size_of::<u32>();
    const DEFAULT_F32_SHIFT: u8 = 8;

    #[inline]
    fn next_raw(&mut self) -> u64 {
        u64::from(self.next_u32())
    }
}

impl RawGenerator for ChaCha8Rng {
    const NAME: &'static str = "chacha8";
    const STATE_BYTES: usize = std::mem::size_of::<Self>();
    const RESULT_BYTES: usize = std::mem::size_of::<u32>();
    const DEFAULT_F32_SHIFT: u8 = 8;

    #[inline]
    fn next_raw(&mut self) -> u64 {
        u64::from(self.next_u32())
    }
}
