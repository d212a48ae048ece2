//! Uniform random permutations (Fisher–Yates).

use crate::context::StreamContext;

impl StreamContext {
    /// Returns a uniformly random permutation of `0..n`.
    ///
    /// Builds the identity permutation and shuffles it in place with
    /// [`shuffle`](StreamContext::shuffle). Every one of the `n!`
    /// permutations is equally likely because the bounded-integer draws
    /// are unbiased. `n = 0` yields an empty vector without drawing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randstream_core::StreamContext;
    ///
    /// let mut ctx = StreamContext::from_seed(42);
    /// let mut perm = ctx.permutation(8);
    /// perm.sort_unstable();
    /// assert_eq!(perm, (0..8).collect::<Vec<_>>());
    /// ```
    pub fn permutation(&mut self, n: usize) -> Vec<usize> {
        let mut out: Vec<usize> = (0..n).collect();
        self.shuffle(&mut out);
        out
    }

    /// Shuffles a slice in place with the Fisher–Yates algorithm.
    ///
    /// Walks from the highest index down, swapping position `i` with a
    /// uniform position in `[0, i]`. Slices of length 0 or 1 consume no
    /// bits.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.uniform_int(i as u64 + 1) as usize;
            slice.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_golden_permutations() {
        // Cross-checked against the reference Fisher–Yates implementation
        // driven by the same generator.
        let mut ctx = StreamContext::from_seed(42);
        assert_eq!(ctx.permutation(8), vec![7, 1, 6, 3, 5, 4, 2, 0]);

        let mut ctx = StreamContext::from_seed(7);
        assert_eq!(ctx.permutation(5), vec![0, 4, 2, 1, 3]);
    }

    #[test]
    fn test_empty_and_singleton() {
        let mut ctx = StreamContext::from_seed(42);
        let untouched = ctx.clone();
        assert!(ctx.permutation(0).is_empty());
        assert_eq!(ctx.permutation(1), vec![0]);
        // neither consumes any bits
        assert_eq!(ctx, untouched);
    }

    #[test]
    fn test_shuffle_preserves_elements() {
        let mut ctx = StreamContext::from_seed(3);
        let mut values = vec!["a", "b", "c", "d", "e"];
        ctx.shuffle(&mut values);
        values.sort_unstable();
        assert_eq!(values, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_shuffle_matches_permutation_draws() {
        // For equal lengths, shuffle and permutation consume the same draw
        // sequence.
        let mut a = StreamContext::from_seed(11);
        let mut b = StreamContext::from_seed(11);
        let mut indices: Vec<usize> = (0..16).collect();
        a.shuffle(&mut indices);
        assert_eq!(indices, b.permutation(16));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Every permutation contains each of 0..n exactly once.
        #[test]
        fn prop_permutation_is_valid(seed in any::<u64>(), n in 0usize..256) {
            let mut ctx = StreamContext::from_seed(seed);
            let mut perm = ctx.permutation(n);
            perm.sort_unstable();
            prop_assert_eq!(perm, (0..n).collect::<Vec<_>>());
        }
    }
}
