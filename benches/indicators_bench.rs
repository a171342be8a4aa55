//! Criterion benchmarks for the ranking and indicator algorithms.
//!
//! Uses synthetic random fronts to measure pure algorithm overhead
//! independent of any genome representation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pareto_kit::hypervolume::{hypervolume, least_contributor};
use pareto_kit::selection::{assign_crowding_dist, sel_nsga2};
use pareto_kit::sorting::{sort_log_non_dominated, sort_non_dominated};
use pareto_kit::{MultiFitness, SortingStrategy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_population(n: usize, objectives: usize, seed: u64) -> Vec<MultiFitness> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let values: Vec<f64> = (0..objectives).map(|_| rng.random_range(0.0..1.0)).collect();
            MultiFitness::minimize(values)
        })
        .collect()
}

fn random_points(n: usize, objectives: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| (0..objectives).map(|_| rng.random_range(0.0..1.0)).collect())
        .collect()
}

fn bench_sorting(c: &mut Criterion) {
    let mut group = c.benchmark_group("non_dominated_sort");
    for &n in &[50usize, 200, 800] {
        let pop = random_population(n, 2, 42);
        group.bench_with_input(BenchmarkId::new("standard", n), &pop, |b, pop| {
            b.iter(|| sort_non_dominated(black_box(pop), pop.len(), false));
        });
        group.bench_with_input(BenchmarkId::new("log", n), &pop, |b, pop| {
            b.iter(|| sort_log_non_dominated(black_box(pop), pop.len(), false));
        });
    }
    group.finish();
}

fn bench_crowding(c: &mut Criterion) {
    let mut pop = random_population(500, 3, 7);
    let front: Vec<usize> = (0..pop.len()).collect();
    c.bench_function("crowding_distance_500x3", |b| {
        b.iter(|| assign_crowding_dist(black_box(&mut pop), black_box(&front)));
    });
}

fn bench_selection(c: &mut Criterion) {
    let pop = random_population(400, 2, 11);
    c.bench_function("sel_nsga2_400_to_200", |b| {
        b.iter_batched(
            || pop.clone(),
            |mut pop| sel_nsga2(black_box(&mut pop), 200, SortingStrategy::Standard),
            criterion::BatchSize::SmallInput,
        );
    });
}

fn bench_hypervolume(c: &mut Criterion) {
    let mut group = c.benchmark_group("hypervolume");
    for &objectives in &[2usize, 3, 4] {
        let points = random_points(60, objectives, 23);
        let reference = vec![2.0; objectives];
        group.bench_with_input(
            BenchmarkId::from_parameter(objectives),
            &points,
            |b, points| {
                b.iter(|| hypervolume(black_box(points), black_box(&reference)).unwrap());
            },
        );
    }
    group.finish();
}

fn bench_least_contributor(c: &mut Criterion) {
    let pop = random_population(30, 3, 31);
    c.bench_function("least_contributor_30x3", |b| {
        b.iter(|| least_contributor(black_box(&pop), None).unwrap());
    });
}

criterion_group!(
    benches,
    bench_sorting,
    bench_crowding,
    bench_selection,
    bench_hypervolume,
    bench_least_contributor
);
criterion_main!(benches);
