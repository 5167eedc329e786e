//! Anti-diagonal ("wavefront") alignment engine.
//!
//! The engine fills the `(len(A)+1) x (len(B)+1)` distance matrix in order
//! of increasing anti-diagonal index `c = i + j`:
//!
//! ```text
//! cell(0,0) = 0
//! cell(i,0) = cell(i-1,0) + ins(A[i-1])
//! cell(0,j) = cell(0,j-1) + ins(B[j-1])
//! cell(i,j) = min(cell(i-1,j-1) + sub(A[i-1], B[j-1]),
//!                 cell(i,  j-1) + ins(B[j-1]),
//!                 cell(i-1,j  ) + ins(A[i-1]))
//! ```
//!
//! Every dependency of a cell on diagonal `c` lies on diagonal `c-1` or
//! `c-2`, so the cells of one diagonal are mutually independent. The
//! [`Traversal`] variants all honour this order (row-major is a special case
//! of it) and return bit-identical distances:
//! - [`Traversal::Wavefront`] fills the full flat matrix diagonal by diagonal.
//! - [`Traversal::RowMajor`] fills the full matrix row by row.
//! - [`Traversal::Rolling`] keeps only the last two diagonals.
//! - `Traversal::Parallel` (feature `parallel`) computes the cells of one
//!   diagonal concurrently with a barrier between diagonals.

use std::fmt;
use std::str::FromStr;

use crate::error::{AlignError, Result};
use crate::matrix::DistanceMatrix;
use crate::traits::{insertion, substitution, CostModel, Distance};
use crate::utils::{default_parallel_min_width, diagonal_cells, diagonal_rows, num_diagonals};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Order in which the engine visits the cells of the distance matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// Full matrix, anti-diagonal order.
    #[default]
    Wavefront,
    /// Full matrix, row-major order.
    RowMajor,
    /// Anti-diagonal order over a window of three diagonals.
    Rolling,
    /// Anti-diagonal order, cells of a diagonal computed in parallel.
    #[cfg(feature = "parallel")]
    Parallel,
}

impl Traversal {
    /// Every traversal compiled into this build.
    #[cfg(feature = "parallel")]
    pub const ALL: &'static [Traversal] = &[
        Traversal::Wavefront,
        Traversal::RowMajor,
        Traversal::Rolling,
        Traversal::Parallel,
    ];
    #[cfg(not(feature = "parallel"))]
    pub const ALL: &'static [Traversal] = &[
        Traversal::Wavefront,
        Traversal::RowMajor,
        Traversal::Rolling,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Traversal::Wavefront => "wavefront",
            Traversal::RowMajor => "row-major",
            Traversal::Rolling => "rolling",
            #[cfg(feature = "parallel")]
            Traversal::Parallel => "parallel",
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Traversal {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Traversal::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == value)
            .ok_or_else(|| {
                let known: Vec<_> = Traversal::ALL.iter().map(|t| t.as_str()).collect();
                format!(
                    "unknown traversal '{value}' (expected one of: {})",
                    known.join(", ")
                )
            })
    }
}

/// Alignment engine for a given cost model `C`.
///
/// Typical usage:
/// ```
/// use wavefront_nw::{AlignmentEngine, models::UnitCost};
///
/// let engine = AlignmentEngine::new(UnitCost);
/// assert_eq!(engine.distance(b"GATTACA", b"GCATGCU"), Ok(4));
/// ```
#[derive(Debug, Clone)]
pub struct AlignmentEngine<C: CostModel> {
    model: C,
    traversal: Traversal,
    parallel_min_width: usize,
}

impl<C: CostModel> AlignmentEngine<C> {
    /// Create an engine using the wavefront traversal.
    pub fn new(model: C) -> Self {
        Self::with_traversal(model, Traversal::default())
    }

    /// Create an engine with an explicit traversal.
    pub fn with_traversal(model: C, traversal: Traversal) -> Self {
        Self {
            model,
            traversal,
            parallel_min_width: default_parallel_min_width(),
        }
    }

    pub(crate) fn set_parallel_min_width(&mut self, width: usize) {
        self.parallel_min_width = width;
    }

    pub fn model(&self) -> &C {
        &self.model
    }

    pub fn traversal(&self) -> Traversal {
        self.traversal
    }

    /// Diagonals with fewer cells than this are computed on one thread.
    pub fn parallel_min_width(&self) -> usize {
        self.parallel_min_width
    }

    /// Fill and return the whole distance matrix in anti-diagonal order.
    ///
    /// The distance is [`DistanceMatrix::last`]. This ignores the configured
    /// traversal: callers asking for the matrix always get the full table.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            level = "debug",
            skip_all,
            fields(len_a = a.len(), len_b = b.len())
        )
    )]
    pub fn fill_matrix(&self, a: &[u8], b: &[u8]) -> Result<DistanceMatrix> {
        self.model.validate()?;
        let (n, m) = (a.len(), b.len());
        let mut matrix = DistanceMatrix::for_lengths(n, m)?;

        for c in 0..num_diagonals(n, m) {
            for (i, j) in diagonal_cells(c, n, m) {
                let value = relax(&self.model, a, b, i, j, |r, s| matrix.get(r, s))?;
                matrix.set(i, j, value);
            }
            #[cfg(feature = "tracing")]
            tracing::trace!(diagonal = c, "diagonal filled");
        }

        Ok(matrix)
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            level = "debug",
            skip_all,
            fields(len_a = a.len(), len_b = b.len())
        )
    )]
    fn fill_matrix_row_major(&self, a: &[u8], b: &[u8]) -> Result<DistanceMatrix> {
        self.model.validate()?;
        let (n, m) = (a.len(), b.len());
        let mut matrix = DistanceMatrix::for_lengths(n, m)?;

        for i in 0..=n {
            for j in 0..=m {
                let value = relax(&self.model, a, b, i, j, |r, s| matrix.get(r, s))?;
                matrix.set(i, j, value);
            }
        }

        Ok(matrix)
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            level = "debug",
            skip_all,
            fields(len_a = a.len(), len_b = b.len())
        )
    )]
    fn rolling_distance(&self, a: &[u8], b: &[u8]) -> Result<Distance> {
        self.model.validate()?;
        let (n, m) = (a.len(), b.len());
        let mut window = DiagonalWindow::new(n)?;

        for c in 0..num_diagonals(n, m) {
            let (prev2, prev1, cur) = window.split();
            let cell = |r: usize, s: usize| if r + s + 1 == c { prev1[r] } else { prev2[r] };
            for i in diagonal_rows(c, n, m) {
                cur[i] = relax(&self.model, a, b, i, c - i, cell)?;
            }
            window.rotate();
        }

        Ok(window.latest()[n])
    }

    /// Serial traversals; `distance` dispatches here.
    fn serial_distance(&self, traversal: Traversal, a: &[u8], b: &[u8]) -> Result<Distance> {
        match traversal {
            Traversal::RowMajor => self.fill_matrix_row_major(a, b).map(|m| m.last()),
            Traversal::Rolling => self.rolling_distance(a, b),
            _ => self.fill_matrix(a, b).map(|m| m.last()),
        }
    }
}

#[cfg(feature = "parallel")]
impl<C> AlignmentEngine<C>
where
    C: CostModel + Sync,
{
    /// Compute the alignment distance between `a` and `b` with the
    /// configured traversal.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip_all, fields(traversal = %self.traversal), ret, err)
    )]
    pub fn distance(&self, a: &[u8], b: &[u8]) -> Result<Distance> {
        match self.traversal {
            Traversal::Parallel => self.parallel_distance(a, b),
            serial => self.serial_distance(serial, a, b),
        }
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            level = "debug",
            skip_all,
            fields(len_a = a.len(), len_b = b.len(), min_width = self.parallel_min_width)
        )
    )]
    fn parallel_distance(&self, a: &[u8], b: &[u8]) -> Result<Distance> {
        self.model.validate()?;
        let (n, m) = (a.len(), b.len());
        let mut window = DiagonalWindow::new(n)?;

        for c in 0..num_diagonals(n, m) {
            let rows = diagonal_rows(c, n, m);
            let lo = *rows.start();
            let (prev2, prev1, cur) = window.split();
            let cell = |r: usize, s: usize| if r + s + 1 == c { prev1[r] } else { prev2[r] };
            let slots = &mut cur[rows];

            if slots.len() < self.parallel_min_width {
                for (k, slot) in slots.iter_mut().enumerate() {
                    *slot = relax(&self.model, a, b, lo + k, c - lo - k, cell)?;
                }
            } else {
                // Each worker owns the slot it writes; collecting the result
                // is the barrier before diagonal c + 1.
                let outcome = slots.par_iter_mut().enumerate().try_for_each(|(k, slot)| {
                    *slot = relax(&self.model, a, b, lo + k, c - lo - k, cell)?;
                    Ok::<(), AlignError>(())
                });
                if let Err(err) = outcome {
                    // Report the same cell a serial sweep would have failed on.
                    for k in 0..slots.len() {
                        relax(&self.model, a, b, lo + k, c - lo - k, cell)?;
                    }
                    return Err(err);
                }
            }
            window.rotate();
        }

        Ok(window.latest()[n])
    }
}

#[cfg(not(feature = "parallel"))]
impl<C: CostModel> AlignmentEngine<C> {
    /// Compute the alignment distance between `a` and `b` with the
    /// configured traversal.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip_all, fields(traversal = %self.traversal), ret, err)
    )]
    pub fn distance(&self, a: &[u8], b: &[u8]) -> Result<Distance> {
        self.serial_distance(self.traversal, a, b)
    }
}

/// Compute the alignment distance between `a` and `b` under `model`, using
/// the full-matrix wavefront traversal.
///
/// ```
/// use wavefront_nw::{distance, models::UnitCost};
///
/// assert_eq!(distance(b"aaa", b"bbb", &UnitCost), Ok(3));
/// assert_eq!(distance(b"", b"ACG", &UnitCost), Ok(3));
/// ```
pub fn distance<C: CostModel + ?Sized>(a: &[u8], b: &[u8], model: &C) -> Result<Distance> {
    AlignmentEngine::new(model)
        .fill_matrix(a, b)
        .map(|matrix| matrix.last())
}

/// Evaluate the recurrence for cell `(i, j)`.
///
/// `cell(r, s)` must return the already computed value of a neighbour.
/// Cost queries happen in a fixed order (substitution, then the gap in `A`,
/// then the gap in `B`), so a failing model is always reported on the same
/// query.
#[inline]
fn relax<C, F>(model: &C, a: &[u8], b: &[u8], i: usize, j: usize, cell: F) -> Result<Distance>
where
    C: CostModel + ?Sized,
    F: Fn(usize, usize) -> Distance,
{
    let step = |from: Distance, cost: Result<Distance>| -> Result<Distance> {
        from.checked_add(cost?)
            .ok_or(AlignError::CostOverflow { row: i, col: j })
    };

    match (i, j) {
        (0, 0) => Ok(0),
        (_, 0) => step(cell(i - 1, 0), insertion(model, a[i - 1])),
        (0, _) => step(cell(0, j - 1), insertion(model, b[j - 1])),
        _ => {
            let (x, y) = (a[i - 1], b[j - 1]);
            let aligned = step(cell(i - 1, j - 1), substitution(model, x, y))?;
            let gap_in_a = step(cell(i, j - 1), insertion(model, y))?;
            let gap_in_b = step(cell(i - 1, j), insertion(model, x))?;
            Ok(aligned.min(gap_in_a).min(gap_in_b))
        }
    }
}

/// The last two completed anti-diagonals plus the one being written, each
/// indexed by row `i`.
struct DiagonalWindow {
    /// `[c - 2, c - 1, c]`
    buffers: [Vec<Distance>; 3],
}

impl DiagonalWindow {
    fn new(n: usize) -> Result<Self> {
        let oom = || AlignError::OutOfMemory { rows: 3, cols: n.saturating_add(1) };
        let len = n.checked_add(1).ok_or_else(oom)?;
        let alloc = || -> Result<Vec<Distance>> {
            let mut buffer = Vec::new();
            buffer.try_reserve_exact(len).map_err(|_| oom())?;
            buffer.resize(len, 0);
            Ok(buffer)
        };
        Ok(Self {
            buffers: [alloc()?, alloc()?, alloc()?],
        })
    }

    fn split(&mut self) -> (&[Distance], &[Distance], &mut [Distance]) {
        let [prev2, prev1, cur] = &mut self.buffers;
        (prev2.as_slice(), prev1.as_slice(), cur.as_mut_slice())
    }

    /// Make the diagonal just written the newest completed one.
    fn rotate(&mut self) {
        self.buffers.rotate_left(1);
    }

    fn latest(&self) -> &[Distance] {
        &self.buffers[1]
    }
}
