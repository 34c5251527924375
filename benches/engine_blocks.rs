use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lis_dp::{
    problems::patience::PatienceProblem, strategies::quadratic_witness, LayeredDp, LisEngine,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn leak_vec(data: Vec<i64>) -> &'static [i64] {
    Box::leak(data.into_boxed_slice())
}

fn random_sequence(rng: &mut StdRng, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.gen::<i64>()).collect()
}

fn bench_block_sizes(c: &mut Criterion) {
    let len = 1 << 16;
    let seq = leak_vec(random_sequence(&mut StdRng::seed_from_u64(0x5155AA55), len));

    let mut group = c.benchmark_group("engine_witness_block_size");
    for &block in &[16usize, 64, 256, 1024, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(block), &block, |b, &block| {
            b.iter(|| {
                let engine = LisEngine::with_block_size(PatienceProblem::new(seq), block);
                black_box(engine.run())
            })
        });
    }
    group.finish();
}

fn bench_forward_step(c: &mut Criterion) {
    let seq = leak_vec(random_sequence(&mut StdRng::seed_from_u64(3), 4096));
    let problem = PatienceProblem::new(seq);
    let mut warm = problem.init_frontier();
    problem.summarize_block(0, seq.len() / 2, &mut warm);

    c.bench_function("patience_forward_half", move |b| {
        b.iter(|| {
            let mut f = warm.clone();
            problem.summarize_block(seq.len() / 2, seq.len(), &mut f);
            black_box(f.len())
        })
    });
}

fn bench_witness_methods(c: &mut Criterion) {
    let seq = leak_vec(random_sequence(&mut StdRng::seed_from_u64(11), 2048));
    let mut group = c.benchmark_group("witness_2048");
    group.bench_function("engine", |b| {
        b.iter(|| black_box(LisEngine::new(PatienceProblem::new(seq)).run()))
    });
    group.bench_function("quadratic_table", |b| {
        b.iter(|| black_box(quadratic_witness(seq)))
    });
    group.finish();
}

criterion_group!(benches, bench_block_sizes, bench_forward_step, bench_witness_methods);
criterion_main!(benches);
