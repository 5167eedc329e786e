use proptest::prelude::*;
use wavefront_nw::{
    distance,
    models::{CostTable, FnCost, LinearCost, UnitCost},
    AlignError, AlignmentEngine, CostQuery, Traversal,
};

#[test]
fn empty_inputs() {
    assert_eq!(distance(b"", b"", &UnitCost), Ok(0));
    let model = LinearCost::new(3, 1);
    assert_eq!(distance(b"", b"ACGT", &model), Ok(12));
    assert_eq!(distance(b"ACG", b"", &model), Ok(9));
}

#[test]
fn single_symbols() {
    assert_eq!(distance(b"x", b"x", &UnitCost), Ok(0));
    assert_eq!(distance(b"x", b"y", &UnitCost), Ok(1));
    // Substituting costs more than deleting then inserting.
    assert_eq!(distance(b"x", b"y", &LinearCost::new(1, 5)), Ok(2));
}

#[test]
fn invalid_model_is_reported_by_every_traversal() {
    for &traversal in Traversal::ALL {
        let engine = AlignmentEngine::with_traversal(LinearCost::new(-1, 1), traversal);
        assert_eq!(
            engine.distance(b"AC", b"AG"),
            Err(AlignError::InvalidCostModel {
                query: CostQuery::Insertion(0),
                cost: -1,
            }),
            "{traversal}"
        );
    }
}

#[test]
fn negative_table_entry_fails_before_any_fill() {
    let model = CostTable::new(1, 1).with_substitution(b'Z', b'Q', -2);
    // Neither sequence contains Z or Q: the table is still rejected up front.
    assert_eq!(
        distance(b"AC", b"GT", &model),
        Err(AlignError::InvalidCostModel {
            query: CostQuery::Substitution(b'Z', b'Q'),
            cost: -2,
        })
    );
}

#[test]
fn negative_closure_answer_fails_when_queried() {
    let model = FnCost::new(|x: u8| if x == b'!' { -4 } else { 1 }, |x: u8, y: u8| i64::from(x != y));
    assert_eq!(distance(b"abc", b"abd", &model), Ok(1));
    for &traversal in Traversal::ALL {
        let engine = AlignmentEngine::with_traversal(&model, traversal);
        assert_eq!(
            engine.distance(b"ab!", b"abc"),
            Err(AlignError::InvalidCostModel {
                query: CostQuery::Insertion(b'!'),
                cost: -4,
            }),
            "{traversal}"
        );
    }
}

proptest! {
    #[test]
    fn identity(a in "[ACGT]{0,16}") {
        prop_assert_eq!(distance(a.as_bytes(), a.as_bytes(), &UnitCost), Ok(0));
    }

    #[test]
    fn symmetry_under_symmetric_costs(a in "[ACGT]{0,12}", b in "[ACGT]{0,12}") {
        let model = CostTable::transition_transversion(1, 2, 2);
        prop_assert_eq!(
            distance(a.as_bytes(), b.as_bytes(), &model),
            distance(b.as_bytes(), a.as_bytes(), &model)
        );
    }

    #[test]
    fn bounded_by_lengths(a in "[ACGT]{0,16}", b in "[ACGT]{0,16}") {
        let d = distance(a.as_bytes(), b.as_bytes(), &UnitCost).unwrap();
        let (n, m) = (a.len() as u64, b.len() as u64);
        prop_assert!(d >= n.abs_diff(m));
        prop_assert!(d <= n.max(m));
    }

    #[test]
    fn appending_changes_distance_by_at_most_one(
        a in "[ACGT]{0,12}",
        b in "[ACGT]{0,12}",
        x in proptest::sample::select(b"ACGT".to_vec()),
    ) {
        let before = distance(a.as_bytes(), b.as_bytes(), &UnitCost).unwrap();
        let mut longer = a.clone().into_bytes();
        longer.push(x);
        let after = distance(&longer, b.as_bytes(), &UnitCost).unwrap();
        prop_assert!(after.abs_diff(before) <= 1);
    }

    #[test]
    fn triangle_inequality(a in "[ACGT]{0,8}", b in "[ACGT]{0,8}", c in "[ACGT]{0,8}") {
        let ab = distance(a.as_bytes(), b.as_bytes(), &UnitCost).unwrap();
        let bc = distance(b.as_bytes(), c.as_bytes(), &UnitCost).unwrap();
        let ac = distance(a.as_bytes(), c.as_bytes(), &UnitCost).unwrap();
        prop_assert!(ac <= ab + bc);
    }
}
