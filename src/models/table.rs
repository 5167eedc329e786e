//! Table-driven cost model.
//!
//! Every byte has its own insertion cost and every ordered byte pair its own
//! substitution cost, so the table can express weighted and asymmetric
//! models. Because the table is enumerable it is validated eagerly.

use crate::error::{AlignError, CostQuery, Result};
use crate::traits::{Cost, CostModel};

const NUM_SYMBOLS: usize = 1 + u8::MAX as usize;

/// Per-symbol insertion costs plus a full substitution table.
#[derive(Clone, PartialEq, Eq)]
pub struct CostTable {
    insertion: Box<[Cost; NUM_SYMBOLS]>,
    /// Row-major `from * NUM_SYMBOLS + to`.
    substitution: Box<[Cost]>,
}

impl CostTable {
    /// Every insertion costs `insertion`, every substitution of unequal
    /// symbols costs `mismatch`, matches are free.
    pub fn new(insertion: Cost, mismatch: Cost) -> Self {
        let mut substitution = vec![mismatch; NUM_SYMBOLS * NUM_SYMBOLS].into_boxed_slice();
        for s in 0..NUM_SYMBOLS {
            substitution[s * NUM_SYMBOLS + s] = 0;
        }
        Self {
            insertion: Box::new([insertion; NUM_SYMBOLS]),
            substitution,
        }
    }

    /// Nucleotide model distinguishing transitions (purine↔purine,
    /// pyrimidine↔pyrimidine) from transversions. Upper- and lower-case
    /// letters are treated alike; other symbols use the transversion cost.
    pub fn transition_transversion(transition: Cost, transversion: Cost, gap: Cost) -> Self {
        let mut table = Self::new(gap, transversion);
        for (x, y) in [(b'A', b'G'), (b'C', b'T')] {
            for (from, to) in [(x, y), (y, x)] {
                for from in [from, from.to_ascii_lowercase()] {
                    for to in [to, to.to_ascii_lowercase()] {
                        table.set_substitution(from, to, transition);
                    }
                }
            }
        }
        for n in *b"ACGT" {
            table.set_substitution(n, n.to_ascii_lowercase(), 0);
            table.set_substitution(n.to_ascii_lowercase(), n, 0);
        }
        table
    }

    /// Set the cost of replacing `from` by `to` (one direction only).
    #[must_use]
    pub fn with_substitution(mut self, from: u8, to: u8, cost: Cost) -> Self {
        self.set_substitution(from, to, cost);
        self
    }

    /// Set the cost of inserting or deleting `symbol`.
    #[must_use]
    pub fn with_insertion(mut self, symbol: u8, cost: Cost) -> Self {
        self.insertion[usize::from(symbol)] = cost;
        self
    }

    pub fn set_substitution(&mut self, from: u8, to: u8, cost: Cost) {
        self.substitution[Self::pair(from, to)] = cost;
    }

    #[inline]
    fn pair(from: u8, to: u8) -> usize {
        usize::from(from) * NUM_SYMBOLS + usize::from(to)
    }
}

impl Default for CostTable {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl CostModel for CostTable {
    #[inline]
    fn insertion_cost(&self, symbol: u8) -> Cost {
        self.insertion[usize::from(symbol)]
    }

    #[inline]
    fn substitution_cost(&self, from: u8, to: u8) -> Cost {
        self.substitution[Self::pair(from, to)]
    }

    fn validate(&self) -> Result<()> {
        if let Some(symbol) = (0..=u8::MAX).find(|&s| self.insertion_cost(s) < 0) {
            return Err(AlignError::InvalidCostModel {
                query: CostQuery::Insertion(symbol),
                cost: self.insertion_cost(symbol),
            });
        }
        for from in 0..=u8::MAX {
            if let Some(to) = (0..=u8::MAX).find(|&to| self.substitution_cost(from, to) < 0) {
                return Err(AlignError::InvalidCostModel {
                    query: CostQuery::Substitution(from, to),
                    cost: self.substitution_cost(from, to),
                });
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for CostTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CostTable").finish_non_exhaustive()
    }
}
