//! Incremental first and second moments (Welford's algorithm).

/// Which denominator to use when turning the sum of squared deviations
/// into a variance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Normalisation {
    /// Divide by `n`: the variance of the observed data itself.
    Population,
    /// Divide by `n − 1`: the unbiased estimate of the source variance.
    Sample,
}

/// Online mean/variance accumulator.
///
/// Tracks the running mean and the sum of squared deviations (M2) with
/// Welford's update, which stays accurate where the naive
/// sum-of-squares formula cancels catastrophically. Accumulators filled
/// on different workers combine exactly with [`Moments::merge`].
///
/// # Examples
///
/// ```rust
/// use randstream_stats::{Moments, Normalisation};
///
/// let mut acc = Moments::new();
/// for x in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     acc.push(x);
/// }
/// assert_eq!(acc.count(), 8);
/// assert_eq!(acc.mean(), 5.0);
/// assert_eq!(acc.variance(Normalisation::Population), 4.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Moments {
    count: u64,
    mean: f64,
    m2: f64,
}

impl Moments {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one sample into the running moments.
    #[inline]
    pub fn push(&mut self, x: f64) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (x - self.mean);
    }

    /// Combines two accumulators as if their samples had been pushed into
    /// one (Chan's parallel update). Either side may be empty.
    pub fn merge(self, other: Self) -> Self {
        if self.count == 0 {
            return other;
        }
        if other.count == 0 {
            return self;
        }

        let count = self.count + other.count;
        let (n_a, n_b, n_ab) = (self.count as f64, other.count as f64, count as f64);
        let delta = other.mean - self.mean;
        Self {
            count,
            mean: (n_a * self.mean + n_b * other.mean) / n_ab,
            m2: self.m2 + other.m2 + delta * delta * n_a * n_b / n_ab,
        }
    }

    /// Number of samples accumulated so far.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Running mean; 0 for an empty accumulator.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Variance under the chosen normalisation.
    ///
    /// Returns 0 when there are too few samples for the denominator
    /// (empty for population, fewer than two for sample).
    pub fn variance(&self, normalisation: Normalisation) -> f64 {
        match normalisation {
            Normalisation::Population => {
                if self.count == 0 {
                    0.0
                } else {
                    self.m2 / self.count as f64
                }
            }
            Normalisation::Sample => {
                if self.count <= 1 {
                    0.0
                } else {
                    self.m2 / (self.count - 1) as f64
                }
            }
        }
    }

    /// Standard deviation under the chosen normalisation.
    #[inline]
    pub fn std_dev(&self, normalisation: Normalisation) -> f64 {
        self.variance(normalisation).sqrt()
    }
}
