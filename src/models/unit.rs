//! Unit costs: the Levenshtein instantiation of the cost model.

use crate::traits::{Cost, CostModel};

/// Insertion costs 1; substitution costs 0 for equal symbols and 1 otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitCost;

impl CostModel for UnitCost {
    #[inline]
    fn insertion_cost(&self, _symbol: u8) -> Cost {
        1
    }

    #[inline]
    fn substitution_cost(&self, from: u8, to: u8) -> Cost {
        Cost::from(from != to)
    }
}
