//! Error type shared by the engine, the storage layer and the cost models.

use std::fmt;

use thiserror::Error;

use crate::traits::Cost;

pub type Result<T> = std::result::Result<T, AlignError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignError {
    /// A cost model answered a query with a negative cost.
    ///
    /// The recurrence only yields minimal distances for non-negative edge
    /// weights, so this is reported instead of silently producing a wrong
    /// distance.
    #[error("invalid cost model: {query} costs {cost}, costs must be non-negative")]
    InvalidCostModel { query: CostQuery, cost: Cost },

    /// The distance matrix cannot be sized or allocated.
    #[error("out of memory: a {rows}x{cols} distance matrix does not fit")]
    OutOfMemory { rows: usize, cols: usize },

    /// A cumulative cost left the range of [`Distance`](crate::traits::Distance).
    #[error("cumulative cost overflowed at cell ({row}, {col})")]
    CostOverflow { row: usize, col: usize },
}

/// The cost query that produced an invalid answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostQuery {
    Insertion(u8),
    Substitution(u8, u8),
}

impl fmt::Display for CostQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CostQuery::Insertion(symbol) => {
                write!(f, "insertion of '{}'", symbol.escape_ascii())
            }
            CostQuery::Substitution(from, to) => write!(
                f,
                "substitution of '{}' by '{}'",
                from.escape_ascii(),
                to.escape_ascii()
            ),
        }
    }
}
