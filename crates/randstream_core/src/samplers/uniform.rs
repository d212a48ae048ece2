//! Primitive samplers: bounded integers and uniform reals.

use crate::context::StreamContext;

/// 2^−53, the spacing of the 53-bit uniform grid on [0, 1).
const UNIT_F64: f64 = 1.0 / 9_007_199_254_740_992.0;

impl StreamContext {
    /// Returns an unbiased uniform integer in `[0, n)`.
    ///
    /// Implements Lemire's multiply-and-reject method: the 128-bit product
    /// of a raw draw with `n` maps onto `[0, n)` via its high word, and the
    /// low word is compared against the threshold `(2^64 − n) mod n` to
    /// reject the draws that would bias the mapping. No value in `[0, n)`
    /// is more likely than any other; the occasional redraw has expected
    /// cost well below one extra raw draw.
    ///
    /// For `n <= 1` the only possible output is 0, returned without
    /// consuming any bits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randstream_core::StreamContext;
    ///
    /// let mut ctx = StreamContext::from_seed(42);
    /// let die = ctx.uniform_int(6);
    /// assert!(die < 6);
    /// assert_eq!(ctx.uniform_int(1), 0);
    /// ```
    #[inline]
    pub fn uniform_int(&mut self, n: u64) -> u64 {
        if n <= 1 {
            return 0;
        }
        let threshold = n.wrapping_neg() % n;
        let mut product = u128::from(self.next_u64()) * u128::from(n);
        let mut low = product as u64;
        if low < n {
            while low < threshold {
                product = u128::from(self.next_u64()) * u128::from(n);
                low = product as u64;
            }
        }
        (product >> 64) as u64
    }

    /// Returns a uniform real in `[0, 1)`.
    ///
    /// Keeps the top 53 bits of one raw draw and scales by 2^−53, so every
    /// output is an exact multiple of 2^−53. May return 0.0; never
    /// returns 1.0.
    #[inline]
    pub fn uniform_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * UNIT_F64
    }

    /// Fills the buffer with uniform reals in `[0, 1)`.
    ///
    /// Zero-allocation batch variant of
    /// [`uniform_f64`](StreamContext::uniform_f64); empty buffers are a
    /// no-op.
    #[inline]
    pub fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.uniform_f64();
        }
    }
}
