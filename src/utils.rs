//! Anti-diagonal geometry and small heuristics shared by the traversals.

use std::ops::RangeInclusive;

/// Number of anti-diagonals of an `(n+1) x (m+1)` matrix: `c = 0..=n+m`.
#[inline]
pub fn num_diagonals(n: usize, m: usize) -> usize {
    n + m + 1
}

/// Rows `i` of the cells `(i, c - i)` on anti-diagonal `c` of an
/// `(n+1) x (m+1)` matrix, in ascending order.
///
/// `c` must lie in `0..=n+m`.
#[inline]
pub fn diagonal_rows(c: usize, n: usize, m: usize) -> RangeInclusive<usize> {
    debug_assert!(c <= n + m, "diagonal {c} out of bounds for {n}x{m}");
    c.saturating_sub(m)..=c.min(n)
}

/// Number of cells on anti-diagonal `c`.
#[inline]
pub fn diagonal_len(c: usize, n: usize, m: usize) -> usize {
    let rows = diagonal_rows(c, n, m);
    rows.end() + 1 - rows.start()
}

/// Cells `(i, j)` of anti-diagonal `c`, `i` ascending.
pub fn diagonal_cells(c: usize, n: usize, m: usize) -> impl Iterator<Item = (usize, usize)> {
    diagonal_rows(c, n, m).map(move |i| (i, c - i))
}

/// Diagonal width below which the parallel traversal stays on one thread.
///
/// Splitting a diagonal only pays off once each worker gets a few cache
/// lines worth of cells.
#[inline]
pub fn default_parallel_min_width() -> usize {
    1024
}
