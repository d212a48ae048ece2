//! The sampling context owned by one execution unit.

use crate::engine::StreamRng;

/// One exclusively-owned sampling context.
///
/// A `StreamContext` bundles a [`StreamRng`] with the cached second variate
/// of the Box–Muller transform (the transform produces two independent
/// standard normals per evaluation; the second is returned by the following
/// [`normal`](StreamContext::normal) call without drawing new bits).
///
/// Every sampler takes `&mut self`, so the borrow checker enforces the
/// one-owner-per-context rule at compile time: a context can never be
/// mutated, or even read, by two concurrent units. No internal
/// synchronisation exists, and none is needed.
///
/// # Cloning
///
/// `StreamContext` is deliberately not `Copy`. It is `Clone`, but cloning
/// is an explicit act with a sharp edge: the clone replays exactly the same
/// future sample sequence, which violates stream independence if both are
/// used. Derive additional streams with [`StreamGrid`](crate::StreamGrid)
/// or with [`jump`](StreamContext::jump) / [`long_jump`](StreamContext::long_jump)
/// instead; reserve cloning for replay and testing.
///
/// # Examples
///
/// ```rust
/// use randstream_core::StreamContext;
///
/// let mut ctx = StreamContext::from_seed(42);
/// let raw = ctx.next_u64();
/// let real = ctx.uniform_f64();
/// assert!((0.0..1.0).contains(&real));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StreamContext {
    pub(crate) rng: StreamRng,
    pub(crate) cached_normal: Option<f64>,
}

impl StreamContext {
    /// Creates a context from a 64-bit seed via SplitMix64 expansion.
    ///
    /// The same seed always produces the same context and therefore the
    /// same sample sequence, across runs and platforms.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StreamRng::from_seed(seed),
            cached_normal: None,
        }
    }

    /// Returns the next raw 64-bit generator output.
    ///
    /// Exposed for advanced callers that want raw bits; all samplers in
    /// this crate are built on top of it.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    /// Advances this context as if 2^128 samples had been drawn.
    ///
    /// Any pending Box–Muller cache is discarded: the cached variate
    /// belongs to the stream position before the jump.
    ///
    /// See [`StreamRng::jump`] for the non-overlap guarantee.
    pub fn jump(&mut self) {
        self.cached_normal = None;
        self.rng.jump();
    }

    /// Advances this context as if 2^192 samples had been drawn.
    ///
    /// See [`StreamRng::long_jump`] for the non-overlap guarantee.
    pub fn long_jump(&mut self) {
        self.cached_normal = None;
        self.rng.long_jump();
    }
}
