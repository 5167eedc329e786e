use crate::engine::{AlignmentEngine, Traversal};
use crate::traits::CostModel;

/// Step-by-step configuration of an [`AlignmentEngine`].
///
/// ```
/// use wavefront_nw::{AlignmentEngineBuilder, Traversal, models::UnitCost};
///
/// let engine = AlignmentEngineBuilder::new(UnitCost)
///     .traversal(Traversal::Rolling)
///     .build();
/// assert_eq!(engine.distance(b"kitten", b"sitting"), Ok(3));
/// ```
pub struct AlignmentEngineBuilder<C: CostModel> {
    model: C,
    traversal: Option<Traversal>,
    parallel_min_width: Option<usize>,
}

impl<C: CostModel> AlignmentEngineBuilder<C> {
    pub fn new(model: C) -> Self {
        Self {
            model,
            traversal: None,
            parallel_min_width: None,
        }
    }

    pub fn traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = Some(traversal);
        self
    }

    /// Diagonals with fewer cells than `width` run on one thread even with the
    /// parallel traversal. `0` parallelizes every diagonal.
    pub fn parallel_min_width(mut self, width: usize) -> Self {
        self.parallel_min_width = Some(width);
        self
    }

    pub fn build(self) -> AlignmentEngine<C> {
        let mut engine =
            AlignmentEngine::with_traversal(self.model, self.traversal.unwrap_or_default());
        if let Some(width) = self.parallel_min_width {
            engine.set_parallel_min_width(width);
        }
        engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UnitCost;
    use crate::utils::default_parallel_min_width;

    #[test]
    fn defaults_match_engine_new() {
        let engine = AlignmentEngineBuilder::new(UnitCost).build();
        assert_eq!(engine.traversal(), Traversal::Wavefront);
        assert_eq!(engine.parallel_min_width(), default_parallel_min_width());
    }

    #[test]
    fn overrides_are_applied() {
        let engine = AlignmentEngineBuilder::new(UnitCost)
            .traversal(Traversal::RowMajor)
            .parallel_min_width(0)
            .build();
        assert_eq!(engine.traversal(), Traversal::RowMajor);
        assert_eq!(engine.parallel_min_width(), 0);
    }
}
