//! Poisson variates with two-regime dispatch.

use std::f64::consts::PI;

use crate::context::StreamContext;

/// Mean above which the multiplicative method would underflow (`e^−λ`
/// reaches the subnormal range long before, but 30 keeps the expected
/// draw count per sample small as well).
const REGIME_THRESHOLD: f64 = 30.0;

/// Numerically stable `ln(1 + e^y)`.
fn log1pexp(y: f64) -> f64 {
    if y > 0.0 {
        y + (-y).exp().ln_1p()
    } else {
        y.exp().ln_1p()
    }
}

impl StreamContext {
    /// Returns a Poisson variate with mean `lambda`.
    ///
    /// Dispatches on the mean: up to 30 the exact multiplicative method
    /// (Knuth) is used; above 30, where `e^−λ` underflows, Atkinson's
    /// rejection method (algorithm PA) takes over. Both regimes are
    /// unbiased and return non-negative integers.
    ///
    /// Negative, NaN, or infinite `lambda` is clamped to 0 occurrences —
    /// there is no statistically meaningful alternative for a degenerate
    /// rate, and it is not worth an error path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randstream_core::StreamContext;
    ///
    /// let mut ctx = StreamContext::from_seed(42);
    /// let small = ctx.poisson(4.5);
    /// let large = ctx.poisson(120.0);
    /// assert_eq!(ctx.poisson(-1.0), 0);
    /// ```
    pub fn poisson(&mut self, lambda: f64) -> u64 {
        if !lambda.is_finite() || lambda < 0.0 {
            return 0;
        }
        if lambda <= REGIME_THRESHOLD {
            self.poisson_knuth(lambda)
        } else {
            self.poisson_atkinson(lambda)
        }
    }

    /// Knuth's multiplicative method: multiply uniforms into a running
    /// product until it falls to `e^−λ`; the number of draws, minus one,
    /// is the variate. Exact, and fast for small means (expected λ + 1
    /// draws per sample).
    fn poisson_knuth(&mut self, lambda: f64) -> u64 {
        let limit = (-lambda).exp();
        let mut product = 1.0;
        let mut draws: u64 = 0;
        loop {
            draws += 1;
            product *= self.uniform_f64();
            if product <= limit {
                return draws - 1;
            }
        }
    }

    /// Atkinson's algorithm PA: propose a candidate through the inverse of
    /// a logistic envelope and accept it against the Poisson log-mass. All
    /// comparisons are in log space, so nothing underflows however large
    /// the mean.
    fn poisson_atkinson(&mut self, lambda: f64) -> u64 {
        let c = 0.767 - 3.36 / lambda;
        let beta = PI / (3.0 * lambda).sqrt();
        let alpha = beta * lambda;
        let k = c.ln() - lambda - beta.ln();
        let log_lambda = lambda.ln();

        loop {
            let u = self.uniform_f64();
            if u <= 0.0 || u >= 1.0 {
                continue;
            }
            let x = (alpha - ((1.0 - u) / u).ln()) / beta;
            let candidate = (x + 0.5).floor();
            if candidate < 0.0 {
                continue;
            }

            let v = self.uniform_f64();
            if v <= 0.0 {
                continue;
            }

            // Envelope density at x vs. Poisson mass at the candidate,
            // both in log space.
            let y = alpha - beta * x;
            let lhs = y + v.ln() - 2.0 * log1pexp(y);
            let rhs = k + candidate * log_lambda - libm::lgamma(candidate + 1.0);
            if lhs <= rhs {
                return candidate as u64;
            }
        }
    }
}
