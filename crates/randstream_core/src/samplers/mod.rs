//! Samplers built on the core generator.
//!
//! All samplers are methods on [`StreamContext`](crate::StreamContext),
//! split by distribution:
//!
//! - [`uniform`]: Lemire's unbiased bounded integers and uniform reals in
//!   [0, 1) — the primitive samplers everything else draws through.
//! - [`normal`]: Box–Muller normal variates with the cached second draw.
//! - [`poisson`]: two-regime Poisson sampling (Knuth's multiplicative
//!   method below mean 30, Atkinson's rejection method above).
//! - [`shuffle`]: Fisher–Yates permutations and in-place shuffles.
//!
//! The rejection loops in the bounded-integer and Poisson samplers are
//! self-correcting parts of the algorithms, bounded in expectation; they
//! are never surfaced to the caller.

pub mod normal;
pub mod poisson;
pub mod shuffle;
pub mod uniform;
