//! Normal variates via the Box–Muller transform.

use std::f64::consts::TAU;

use crate::context::StreamContext;

impl StreamContext {
    /// Returns a normal variate with the given mean and standard deviation.
    ///
    /// Uses the Box–Muller transform, which converts one uniform pair
    /// (U, V) into two independent standard normals. The sine branch is
    /// cached on the context and returned by the next call without drawing
    /// new bits, so consecutive calls alternate between a fresh pair and
    /// its cached partner. U is redrawn while exactly 0 to keep the
    /// logarithm finite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randstream_core::StreamContext;
    ///
    /// let mut ctx = StreamContext::from_seed(42);
    /// let x = ctx.normal(10.0, 2.0);
    /// assert!(x.is_finite());
    /// ```
    pub fn normal(&mut self, mean: f64, std: f64) -> f64 {
        if let Some(cached) = self.cached_normal.take() {
            return mean + std * cached;
        }

        let mut u = self.uniform_f64();
        while u <= 0.0 {
            u = self.uniform_f64();
        }
        let v = self.uniform_f64();

        let mag = (-2.0 * u.ln()).sqrt();
        let angle = TAU * v;
        self.cached_normal = Some(mag * angle.sin());
        mean + std * mag * angle.cos()
    }

    /// Returns a standard normal variate (mean 0, standard deviation 1).
    #[inline]
    pub fn standard_normal(&mut self) -> f64 {
        self.normal(0.0, 1.0)
    }

    /// Fills the buffer with standard normal variates.
    ///
    /// Draws through the same Box–Muller cache as
    /// [`normal`](StreamContext::normal), so interleaving scalar and batch
    /// calls preserves the documented alternation. Empty buffers are a
    /// no-op.
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.standard_normal();
        }
    }
}
