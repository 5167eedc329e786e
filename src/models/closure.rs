//! Cost model assembled from two closures.

use std::fmt;

use crate::traits::{Cost, CostModel};

/// Adapts an insertion closure and a substitution closure.
///
/// The closures cannot be enumerated, so [`validate`](CostModel::validate)
/// accepts the model and a negative answer is reported by the first query
/// that observes it.
///
/// ```
/// use wavefront_nw::{distance, models::FnCost};
///
/// // Gaps cost 2, any mismatch 3.
/// let model = FnCost::new(|_| 2, |a, b| if a == b { 0 } else { 3 });
/// assert_eq!(distance(b"ACGT", b"AGT", &model), Ok(2));
/// ```
#[derive(Clone, Copy)]
pub struct FnCost<I, S> {
    insertion: I,
    substitution: S,
}

impl<I, S> FnCost<I, S>
where
    I: Fn(u8) -> Cost,
    S: Fn(u8, u8) -> Cost,
{
    pub fn new(insertion: I, substitution: S) -> Self {
        Self {
            insertion,
            substitution,
        }
    }
}

impl<I, S> CostModel for FnCost<I, S>
where
    I: Fn(u8) -> Cost,
    S: Fn(u8, u8) -> Cost,
{
    #[inline]
    fn insertion_cost(&self, symbol: u8) -> Cost {
        (self.insertion)(symbol)
    }

    #[inline]
    fn substitution_cost(&self, from: u8, to: u8) -> Cost {
        (self.substitution)(from, to)
    }
}

impl<I, S> fmt::Debug for FnCost<I, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCost").finish_non_exhaustive()
    }
}
