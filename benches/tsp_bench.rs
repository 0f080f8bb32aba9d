//! Criterion benchmarks for the TSP genetic algorithm.
//!
//! Cities are placed pseudo-randomly in a square so every run measures the
//! same instance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tsp_ga::ga::{order_crossover, TspGaConfig};
use tsp_ga::{CityCatalog, Route, TspGa};

fn random_catalog(n: usize) -> CityCatalog {
    let mut rng = StdRng::seed_from_u64(7);
    let points = (0..n)
        .map(|_| (rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
        .collect::<Vec<(f64, f64)>>();
    CityCatalog::try_from(points).expect("valid catalog")
}

fn bench_ga_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_run");
    group.sample_size(10);

    for (cities, pop, gen) in [(10usize, 50usize, 100usize), (50, 100, 50), (100, 100, 20)] {
        let catalog = random_catalog(cities);
        let config = TspGaConfig::default()
            .with_population_size(pop)
            .with_generations(gen)
            .with_mutation_rate(0.02)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_p{}_g{}", cities, pop, gen), cities),
            &(catalog, config),
            |b, (cat, cfg)| {
                b.iter(|| {
                    let mut ga = TspGa::new(cat.clone(), cfg.clone()).expect("valid");
                    black_box(ga.run().expect("run"))
                })
            },
        );
    }
    group.finish();
}

fn bench_order_crossover(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_crossover");

    for &n in &[10usize, 100, 1000] {
        let p1 = Route::identity(n);
        let p2 = Route::from_indices((0..n).rev().collect(), n).expect("valid route");
        let mut rng = StdRng::seed_from_u64(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(p1, p2), |b, (a, d)| {
            b.iter(|| black_box(order_crossover(a, d, &mut rng).expect("same length")))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ga_run, bench_order_crossover);
criterion_main!(benches);
