use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use dary_sssp::graph::generators::{generate_connected, generate_grid};
use dary_sssp::{EngineConfig, ShortestPathEngine};
use rand::rngs::StdRng;
use rand::SeedableRng;

// Engines are built in the setup closure so only `run` is timed
fn bench_random_graphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_connected");
    let mut rng = StdRng::seed_from_u64(7);

    for &n in &[1_000usize, 10_000] {
        let edges = generate_connected(n, 4 * n, 100, &mut rng);
        for d in [2usize, 4, 8] {
            let config = EngineConfig::default().with_branching_factor(d);
            let engine = ShortestPathEngine::with_config(n, &edges, config).unwrap();
            group.bench_with_input(BenchmarkId::new(format!("d{}", d), n), &engine, |b, engine| {
                b.iter_batched(
                    || engine.clone(),
                    |mut engine| black_box(engine.run(1).unwrap()),
                    BatchSize::SmallInput,
                )
            });
        }
    }

    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_100x100");
    let edges = generate_grid(100, 100);

    for d in [2usize, 4] {
        let config = EngineConfig::default().with_branching_factor(d);
        let engine = ShortestPathEngine::with_config(10_000, &edges, config).unwrap();
        group.bench_function(format!("d{}", d), |b| {
            b.iter_batched(
                || engine.clone(),
                |mut engine| black_box(engine.run(1).unwrap()),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_random_graphs, bench_grid);
criterion_main!(benches);
