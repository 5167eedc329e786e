use crate::error::{AlignError, CostQuery, Result};
use crate::traits::{Cost, CostModel};

/// Constant insertion cost, constant mismatch cost, free matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearCost {
    pub insertion: Cost,
    pub mismatch: Cost,
}

impl LinearCost {
    pub fn new(insertion: Cost, mismatch: Cost) -> Self {
        Self {
            insertion,
            mismatch,
        }
    }
}

impl Default for LinearCost {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl CostModel for LinearCost {
    #[inline]
    fn insertion_cost(&self, _symbol: u8) -> Cost {
        self.insertion
    }

    #[inline]
    fn substitution_cost(&self, from: u8, to: u8) -> Cost {
        if from == to {
            0
        } else {
            self.mismatch
        }
    }

    fn validate(&self) -> Result<()> {
        // Both constants are answered for every symbol; report them against
        // the first symbol pair that would observe them.
        if self.insertion < 0 {
            return Err(AlignError::InvalidCostModel {
                query: CostQuery::Insertion(0),
                cost: self.insertion,
            });
        }
        if self.mismatch < 0 {
            return Err(AlignError::InvalidCostModel {
                query: CostQuery::Substitution(0, 1),
                cost: self.mismatch,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_are_free() {
        let model = LinearCost::new(3, 2);
        assert_eq!(model.insertion_cost(b'G'), 3);
        assert_eq!(model.substitution_cost(b'G', b'G'), 0);
        assert_eq!(model.substitution_cost(b'G', b'T'), 2);
        assert!(model.validate().is_ok());
    }

    #[test]
    fn zero_mismatch_is_legal() {
        assert!(LinearCost::new(1, 0).validate().is_ok());
    }

    #[test]
    fn negative_constants_fail_validation() {
        assert!(matches!(
            LinearCost::new(-1, 1).validate(),
            Err(AlignError::InvalidCostModel {
                query: CostQuery::Insertion(_),
                cost: -1
            })
        ));
        assert!(matches!(
            LinearCost::new(1, -4).validate(),
            Err(AlignError::InvalidCostModel {
                query: CostQuery::Substitution(..),
                cost: -4
            })
        ));
    }
}
