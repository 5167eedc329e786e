//! Benchmark: every traversal on the same input, so the rolling and parallel
//! variants can be compared against the full-matrix baseline.
//!
//! Run with:
//! `cargo bench --bench traversals --features parallel`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use wavefront_nw::{
    models::{CostTable, UnitCost},
    AlignmentEngine, CostModel, Traversal,
};

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx]
        })
        .collect()
}

fn bench_model<C>(c: &mut Criterion, name: &str, model: C)
where
    C: CostModel + Sync + Clone,
{
    let mut rng = StdRng::seed_from_u64(0x5155AA55);
    let len = 2048;
    let s = random_dna(&mut rng, len);
    let t = random_dna(&mut rng, len);

    let mut group = c.benchmark_group(name);
    group.sample_size(10);
    for &traversal in Traversal::ALL {
        let engine = AlignmentEngine::with_traversal(model.clone(), traversal);
        group.bench_with_input(BenchmarkId::from_parameter(traversal), &traversal, |b, _| {
            b.iter(|| black_box(engine.distance(black_box(&s), black_box(&t))))
        });
    }
    group.finish();
}

fn bench_unit(c: &mut Criterion) {
    bench_model(c, "traversals_unit_cost", UnitCost);
}

fn bench_table(c: &mut Criterion) {
    bench_model(c, "traversals_cost_table", CostTable::transition_transversion(1, 2, 3));
}

criterion_group!(benches, bench_unit, bench_table);
criterion_main!(benches);
