//! Rank-aware work splitting.
//!
//! Maps a flat workload of `total` items onto `size` ranks, and
//! (rank, thread) pairs onto the row-major cell layout used by the stream
//! grid. These helpers supply plain integers; they neither perform the
//! work nor build the grid.

use std::ops::Range;

/// Returns the contiguous range of items owned by `rank` out of `total`.
///
/// Every rank receives `total / size` items; the last rank also absorbs
/// the remainder, so the ranges of all ranks tile `0..total` exactly with
/// no gaps or overlaps.
///
/// # Panics
///
/// Panics if `size` is zero or `rank >= size`.
///
/// # Examples
///
/// ```rust
/// use randstream_stats::partition_work;
///
/// assert_eq!(partition_work(0, 3, 10), 0..3);
/// assert_eq!(partition_work(1, 3, 10), 3..6);
/// assert_eq!(partition_work(2, 3, 10), 6..10); // remainder goes last
/// ```
pub fn partition_work(rank: usize, size: usize, total: usize) -> Range<usize> {
    assert!(size > 0, "cannot partition work across zero ranks");
    assert!(rank < size, "rank {rank} out of range for {size} ranks");

    let share = total / size;
    let start = rank * share;
    if rank == size - 1 {
        start..total
    } else {
        start..start + share
    }
}

/// Returns the row-major flat index of the grid cell owned by
/// `(rank, thread)` in a grid with `inner` cells per rank.
///
/// Consistent with the stream grid's construction order, so each
/// execution unit can select its context by index alone.
///
/// # Panics
///
/// Panics if `inner` is zero or `thread >= inner`.
pub fn grid_cell(rank: usize, thread: usize, inner: usize) -> usize {
    assert!(inner > 0, "grid must have at least one cell per rank");
    assert!(
        thread < inner,
        "thread {thread} out of range for {inner} threads per rank"
    );
    rank * inner + thread
}
