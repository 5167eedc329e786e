use wavefront_nw::{
    distance,
    models::{CostTable, UnitCost},
    AlignmentEngineBuilder, DistanceMatrix, Sequence, Traversal,
};

fn valid_matrix(matrix: &DistanceMatrix, n: usize, m: usize) -> bool {
    if matrix.rows() != n + 1 || matrix.cols() != m + 1 {
        return false;
    }
    if matrix.get(0, 0) != 0 {
        return false;
    }
    // Unit costs: neighbouring cells differ by at most one.
    for i in 0..=n {
        for j in 0..=m {
            if i > 0 && matrix.get(i, j).abs_diff(matrix.get(i - 1, j)) > 1 {
                return false;
            }
            if j > 0 && matrix.get(i, j).abs_diff(matrix.get(i, j - 1)) > 1 {
                return false;
            }
        }
    }
    true
}

#[test]
fn nw_example_integration() {
    let s = Sequence::from("GATTACA");
    let t = Sequence::from("GCATGCU");
    let engine = AlignmentEngineBuilder::new(UnitCost).build();
    let matrix = engine.fill_matrix(&s, &t).unwrap();
    assert!(valid_matrix(&matrix, s.len(), t.len()));
    assert_eq!(matrix.last(), 4);
    assert_eq!(engine.distance(&s, &t), Ok(4));
}

#[test]
fn classic_pairs() {
    for (a, b, expected) in [
        ("kitten", "sitting", 3),
        ("flaw", "lawn", 2),
        ("intention", "execution", 5),
        ("", "abc", 3),
        ("abc", "abc", 0),
    ] {
        for &traversal in Traversal::ALL {
            let engine = AlignmentEngineBuilder::new(UnitCost).traversal(traversal).build();
            assert_eq!(
                engine.distance(a.as_bytes(), b.as_bytes()),
                Ok(expected),
                "{a} vs {b} ({traversal})"
            );
        }
    }
}

#[test]
fn weighted_nucleotides() {
    // One transition (A<->G) is cheaper than a gap pair; C<->A is a transversion.
    let model = CostTable::transition_transversion(1, 4, 3);
    assert_eq!(distance(b"ACGT", b"GCGT", &model), Ok(1));
    assert_eq!(distance(b"ACGT", b"CCGT", &model), Ok(4));
    assert_eq!(distance(b"ACGT", b"acgt", &model), Ok(0));
    assert_eq!(distance(b"ACGT", b"ACG", &model), Ok(3));
}
