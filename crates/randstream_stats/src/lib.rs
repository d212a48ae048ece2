//! # randstream_stats: Collaborators for Parallel Sampling Runs
//!
//! Small utilities that sit next to the stream engine without depending on
//! it:
//!
//! - [`moments::Moments`]: an incremental (Welford) mean/variance
//!   accumulator for the real-valued sampler outputs, with an exact merge
//!   for parallel reductions.
//! - [`partition`]: rank-aware work splitting, so each execution unit
//!   knows which contiguous share of the total workload — and which grid
//!   cell — is its own.
//!
//! Neither utility knows how its inputs were produced; data flows in one
//! direction only, as plain `f64` samples and index values.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod moments;
pub mod partition;

pub use moments::{Moments, Normalisation};
pub use partition::{grid_cell, partition_work};
