//! Flat storage for the distance matrix.
//!
//! The `(n+1) x (m+1)` table lives in one contiguous buffer addressed by
//! `i * cols + j`, so a fill never allocates per row and never chases row
//! pointers.

use std::ops::Index;

use crate::error::{AlignError, Result};
use crate::traits::Distance;

/// Dynamic-programming table of minimal cumulative costs.
///
/// Cell `(i, j)` holds the minimum cost of transforming the first `i`
/// symbols of `A` into the first `j` symbols of `B`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<Distance>,
}

impl DistanceMatrix {
    /// Allocate a zeroed matrix for sequences of lengths `len_a` and `len_b`.
    ///
    /// Fails with [`AlignError::OutOfMemory`] when the cell count overflows
    /// `usize` or the allocation is refused.
    pub fn for_lengths(len_a: usize, len_b: usize) -> Result<Self> {
        let rows = len_a
            .checked_add(1)
            .ok_or(AlignError::OutOfMemory { rows: len_a, cols: len_b })?;
        let cols = len_b
            .checked_add(1)
            .ok_or(AlignError::OutOfMemory { rows: len_a, cols: len_b })?;
        Self::new(rows, cols)
    }

    /// Allocate a zeroed `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let oom = AlignError::OutOfMemory { rows, cols };
        let len = rows.checked_mul(cols).ok_or_else(|| oom.clone())?;
        len.checked_mul(std::mem::size_of::<Distance>())
            .filter(|&bytes| bytes <= isize::MAX as usize)
            .ok_or_else(|| oom.clone())?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| oom)?;
        cells.resize(len, 0);
        Ok(Self { rows, cols, cells })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Flat index of `(i, j)`.
    #[inline]
    pub fn offset(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.rows && j < self.cols, "({i}, {j}) out of bounds");
        i * self.cols + j
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Distance {
        self.cells[self.offset(i, j)]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: Distance) {
        let offset = self.offset(i, j);
        self.cells[offset] = value;
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> &[Distance] {
        let start = self.offset(i, 0);
        &self.cells[start..start + self.cols]
    }

    /// The bottom-right cell: the distance between the full sequences.
    #[inline]
    pub fn last(&self) -> Distance {
        self.cells.last().copied().unwrap_or(0)
    }

    /// All cells in row-major order.
    pub fn as_slice(&self) -> &[Distance] {
        &self.cells
    }
}

impl Index<(usize, usize)> for DistanceMatrix {
    type Output = Distance;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.cells[self.offset(i, j)]
    }
}
