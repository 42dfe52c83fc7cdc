//! Compares the full-table aligner with the linear-memory one.
//!
//! Run with `cargo bench`.
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use pa_hirschberg::{generate::generate_pair, AlignerType, CostModel};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_aligners(c: &mut Criterion) {
    let mut group = c.benchmark_group("align");
    group.sample_size(10);

    for len in [250usize, 1000, 4000] {
        for t in [AlignerType::Basic, AlignerType::Efficient] {
            let aligner = t.build(CostModel::default());
            group.bench_with_input(BenchmarkId::new(format!("{t:?}"), len), &len, |bench, &len| {
                bench.iter_batched(
                    || generate_pair(len, 0.1, &mut ChaCha8Rng::seed_from_u64(42)),
                    |(a, b)| criterion::black_box(aligner.align(&a, &b).unwrap().cost),
                    BatchSize::LargeInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_cost_only(c: &mut Criterion) {
    let (a, b) = generate_pair(4000, 0.1, &mut ChaCha8Rng::seed_from_u64(42));
    let aligner = AlignerType::Efficient.build(CostModel::default());
    c.bench_function("cost_4000", |bench| {
        bench.iter(|| criterion::black_box(aligner.cost(&a, &b).unwrap()))
    });
}

criterion_group!(benches, bench_aligners, bench_cost_only);
criterion_main!(benches);
