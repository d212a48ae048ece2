//! The core bit generator.
//!
//! This module contains the sole entropy source of the crate:
//! [`StreamRng`], a xoshiro256** generator with SplitMix64 seed expansion
//! and polynomial jump-ahead stream separation. Everything else in the
//! crate draws its randomness through this type.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: seeding, generation, and jumping are all
//!   deterministic; no hidden global state.
//! - **Stream separation**: `jump` and `long_jump` advance the state as if
//!   2^128 (resp. 2^192) outputs had been drawn, carving provably
//!   non-overlapping sub-streams out of the generator's 2^256−1 period.
//! - **Ecosystem integration**: `StreamRng` implements
//!   [`rand_core::RngCore`] and [`rand_core::SeedableRng`], so it plugs
//!   into `rand` adaptors without giving up determinism.

mod splitmix;
mod xoshiro;

pub use xoshiro::StreamRng;
