#![cfg(feature = "heavy")]
use rand::{rngs::StdRng, Rng, SeedableRng};
use wavefront_nw::{models::UnitCost, AlignmentEngine, Traversal};

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx]
        })
        .collect()
}

#[test]
fn heavy_homopolymers_default_size() {
    let a = vec![b'a'; 2000];
    let b = vec![b'b'; 2000];
    for &traversal in Traversal::ALL {
        let engine = AlignmentEngine::with_traversal(UnitCost, traversal);
        assert_eq!(engine.distance(&a, &b), Ok(2000), "{traversal}");
    }
}

#[test]
fn heavy_random_dna_traversals_agree() {
    let mut rng = StdRng::seed_from_u64(123);
    let s = random_dna(&mut rng, 5_000);
    let t = random_dna(&mut rng, 4_000);
    let reference = AlignmentEngine::with_traversal(UnitCost, Traversal::Rolling)
        .distance(&s, &t)
        .unwrap();
    assert!(reference >= 1_000);
    assert!(reference <= 5_000);
    for &traversal in Traversal::ALL {
        let engine = AlignmentEngine::with_traversal(UnitCost, traversal);
        assert_eq!(engine.distance(&s, &t), Ok(reference), "{traversal}");
    }
}
