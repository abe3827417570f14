//! Criterion benchmarks for the tour GA.
//!
//! Measures the individual operators and a full run on random instances.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tour_ga::ga::{
    compute_fitnesses, find_optimal, initial_population, roulette_weights, select_parents,
    swap_mutation, two_point_crossover, GaConfig, GaRunner,
};
use tour_ga::random::create_rng;
use tour_ga::DistanceMatrix;

// ===========================================================================
// Operators
// ===========================================================================

fn bench_crossover(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_point_crossover");
    for n in [8usize, 64, 512] {
        let mut rng = create_rng(42);
        let parents = initial_population(2, n, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| two_point_crossover(black_box(&parents[0]), black_box(&parents[1]), &mut rng))
        });
    }
    group.finish();
}

fn bench_mutation(c: &mut Criterion) {
    let mut rng = create_rng(42);
    let mut population = initial_population(400, 64, &mut rng);
    c.bench_function("swap_mutation/400x64", |b| {
        b.iter(|| swap_mutation(black_box(&mut population), 0.2, &mut rng))
    });
}

fn bench_selection(c: &mut Criterion) {
    let mut rng = create_rng(42);
    let matrix = DistanceMatrix::random(32, 100, &mut rng);
    let population = initial_population(400, 32, &mut rng);
    let fitnesses = compute_fitnesses(&population, &matrix).unwrap();
    let weights = roulette_weights(&fitnesses).unwrap();
    c.bench_function("select_parents/400", |b| {
        b.iter(|| select_parents(black_box(&weights), &mut rng))
    });
}

fn bench_fitness(c: &mut Criterion) {
    let mut rng = create_rng(42);
    let matrix = DistanceMatrix::random(64, 100, &mut rng);
    let population = initial_population(400, 64, &mut rng);
    c.bench_function("compute_fitnesses/400x64", |b| {
        b.iter(|| compute_fitnesses(black_box(&population), &matrix))
    });
}

// ===========================================================================
// Oracle and full runs
// ===========================================================================

fn bench_oracle(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_optimal");
    group.sample_size(10);
    for n in [6usize, 8] {
        let matrix = DistanceMatrix::random(n, 30, &mut create_rng(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &matrix, |b, m| {
            b.iter(|| find_optimal(black_box(m)))
        });
    }
    group.finish();
}

fn bench_runner(c: &mut Criterion) {
    let matrix = DistanceMatrix::random(16, 30, &mut create_rng(1));
    let config = GaConfig::new(16, 100, 0.25, 0.2, 50).with_oracle(false);
    c.bench_function("ga_runner/16_cities", |b| {
        b.iter(|| GaRunner::run(black_box(&matrix), &config, &mut create_rng(42)))
    });
}

criterion_group!(
    benches,
    bench_crossover,
    bench_mutation,
    bench_selection,
    bench_fitness,
    bench_oracle,
    bench_runner
);
criterion_main!(benches);
