//! The cost-model capability the alignment engine is parameterized by.
//!
//! The engine never hard-codes costs: every insertion and substitution it
//! relaxes is priced by a [`CostModel`]. Swapping the model (unit costs, a
//! weighted substitution table, a pair of closures) never touches the
//! traversal logic.
//!
//! Costs are signed on purpose. A model is allowed to *answer* with a
//! negative value so that a misconfiguration can be reported, but the
//! engine rejects such answers with
//! [`AlignError::InvalidCostModel`](crate::error::AlignError::InvalidCostModel).

use crate::error::{AlignError, CostQuery, Result};

/// Answer type of a cost query.
pub type Cost = i64;

/// Cumulative (always non-negative) cost stored in the distance matrix.
pub type Distance = u64;

/// Pricing of the three edit operations.
///
/// Insertions and deletions share [`insertion_cost`](Self::insertion_cost):
/// deleting a symbol of `A` is the same operation as inserting it into `B`.
///
/// Requirements:
/// - Both methods must be pure: the same query always yields the same cost.
/// - Answers must be non-negative. Returning `0` for a substitution of two
///   unequal symbols is legal and merely changes which alignment is optimal.
/// - Substitution costs may be asymmetric.
pub trait CostModel {
    /// Cost of inserting (or deleting) `symbol`.
    fn insertion_cost(&self, symbol: u8) -> Cost;

    /// Cost of replacing `from` (a symbol of `A`) by `to` (a symbol of `B`).
    fn substitution_cost(&self, from: u8, to: u8) -> Cost;

    /// Eagerly check the whole model.
    ///
    /// Models backed by an enumerable table override this so that an invalid
    /// entry is reported before any cell is computed, even if the inputs
    /// would never query it. The default accepts everything and leaves
    /// detection to the individual queries.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

impl<C: CostModel + ?Sized> CostModel for &C {
    #[inline]
    fn insertion_cost(&self, symbol: u8) -> Cost {
        (**self).insertion_cost(symbol)
    }

    #[inline]
    fn substitution_cost(&self, from: u8, to: u8) -> Cost {
        (**self).substitution_cost(from, to)
    }

    fn validate(&self) -> Result<()> {
        (**self).validate()
    }
}

impl<C: CostModel + ?Sized> CostModel for Box<C> {
    #[inline]
    fn insertion_cost(&self, symbol: u8) -> Cost {
        (**self).insertion_cost(symbol)
    }

    #[inline]
    fn substitution_cost(&self, from: u8, to: u8) -> Cost {
        (**self).substitution_cost(from, to)
    }

    fn validate(&self) -> Result<()> {
        (**self).validate()
    }
}

/// Convert a raw answer into a [`Distance`], rejecting negative costs.
#[inline]
pub(crate) fn checked_cost(query: CostQuery, cost: Cost) -> Result<Distance> {
    Distance::try_from(cost).map_err(|_| AlignError::InvalidCostModel { query, cost })
}

#[inline]
pub(crate) fn insertion<C: CostModel + ?Sized>(model: &C, symbol: u8) -> Result<Distance> {
    checked_cost(CostQuery::Insertion(symbol), model.insertion_cost(symbol))
}

#[inline]
pub(crate) fn substitution<C: CostModel + ?Sized>(model: &C, from: u8, to: u8) -> Result<Distance> {
    checked_cost(
        CostQuery::Substitution(from, to),
        model.substitution_cost(from, to),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Skewed;

    impl CostModel for Skewed {
        fn insertion_cost(&self, symbol: u8) -> Cost {
            if symbol == b'N' {
                -1
            } else {
                2
            }
        }
        fn substitution_cost(&self, from: u8, to: u8) -> Cost {
            Cost::from(from) - Cost::from(to)
        }
    }

    #[test]
    fn non_negative_answers_pass_through() {
        assert_eq!(insertion(&Skewed, b'A'), Ok(2));
        assert_eq!(substitution(&Skewed, b'T', b'A'), Ok(19));
        assert_eq!(substitution(&Skewed, b'A', b'A'), Ok(0));
    }

    #[test]
    fn negative_answers_are_rejected_with_their_query() {
        assert_eq!(
            insertion(&Skewed, b'N'),
            Err(AlignError::InvalidCostModel {
                query: CostQuery::Insertion(b'N'),
                cost: -1,
            })
        );
        assert_eq!(
            substitution(&Skewed, b'A', b'T'),
            Err(AlignError::InvalidCostModel {
                query: CostQuery::Substitution(b'A', b'T'),
                cost: -19,
            })
        );
    }

    #[test]
    fn references_and_boxes_forward() {
        let by_ref = &Skewed;
        assert_eq!(by_ref.insertion_cost(b'C'), 2);
        let boxed: Box<dyn CostModel> = Box::new(Skewed);
        assert_eq!(boxed.substitution_cost(b'C', b'A'), 2);
        assert!(boxed.validate().is_ok());
    }
}
