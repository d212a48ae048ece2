//! SplitMix64 seed expansion.

/// Advances the accumulator by the SplitMix64 increment and returns one
/// mixed 64-bit word.
///
/// Used to expand a single seed into the four generator state words. Any
/// seed, including 0 or other structured values, yields output words that
/// are statistically indistinguishable from random, which is what keeps the
/// xoshiro state away from its all-zero fixed point.
#[inline]
pub(crate) fn splitmix64(acc: &mut u64) -> u64 {
    *acc = acc.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = *acc;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
