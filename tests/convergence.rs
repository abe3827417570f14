//! End-to-end runs of the generation loop against the brute-force oracle.

use tour_ga::ga::{
    find_optimal, find_optimal_tour, fitness, is_permutation, GaConfig, GaRunner, Termination,
};
use tour_ga::random::create_rng;
use tour_ga::{ConfigError, DistanceMatrix, GaError};

/// Random instance whose off-diagonal distances are all at least 1.
fn instance(n: usize, seed: u64) -> DistanceMatrix {
    let mut rng = create_rng(seed);
    let base = DistanceMatrix::random(n, 30, &mut rng);
    let rows: Vec<Vec<f64>> = base
        .rows()
        .enumerate()
        .map(|(i, row)| {
            row.iter()
                .enumerate()
                .map(|(j, &d)| if i == j { 0.0 } else { d + 1.0 })
                .collect()
        })
        .collect();
    DistanceMatrix::new(rows).unwrap()
}

#[test]
fn small_instances_reach_the_optimum() {
    for seed in 0..5 {
        let matrix = instance(5, seed);
        let config = GaConfig::new(5, 40, 0.5, 0.4, 200);

        let result = GaRunner::run(&matrix, &config, &mut create_rng(seed)).unwrap();

        assert_eq!(
            result.termination,
            Termination::Converged,
            "seed {seed} did not converge: best {} vs optimum {:?}",
            result.best_fitness,
            result.optimal_fitness
        );
        assert_eq!(Some(result.best_fitness), result.optimal_fitness);
        assert_eq!(fitness(&result.best, &matrix), Ok(result.best_fitness));
    }
}

#[test]
fn eight_city_trials_respect_invariants() {
    let matrix = instance(8, 42);
    let optimum = find_optimal(&matrix).unwrap();
    let config = GaConfig::new(8, 100, 0.25, 0.2, 20);
    let mut rng = create_rng(7);

    // Three trials share one oracle result, like the command-line driver.
    for _ in 0..3 {
        let mut previous_best = f64::INFINITY;
        let result = GaRunner::run_with_target(&matrix, &config, Some(optimum), &mut rng, |stats| {
            assert!(is_permutation(&stats.best_tour, 8));
            assert!(stats.best_fitness <= previous_best);
            assert!(stats.best_fitness >= optimum);
            assert!(stats.mean_fitness >= stats.best_fitness);
            previous_best = stats.best_fitness;
        })
        .unwrap();

        assert!(result.generations <= 20);
        assert_eq!(result.fitness_history.len(), result.generations);
        match result.termination {
            Termination::Converged => assert_eq!(result.best_fitness, optimum),
            Termination::Exhausted => assert_eq!(result.generations, 20),
        }
    }
}

#[test]
fn oracle_tour_is_optimal() {
    let matrix = instance(6, 11);
    let (tour, best) = find_optimal_tour(&matrix).unwrap();
    assert!(is_permutation(&tour, 6));
    assert_eq!(fitness(&tour, &matrix), Ok(best));
}

#[test]
fn configuration_errors_abort_the_run() {
    let matrix = instance(5, 1);
    let mut rng = create_rng(1);

    let cases = [
        (
            GaConfig::new(5, 1, 0.5, 0.2, 10),
            ConfigError::PopulationTooSmall(1),
        ),
        (
            GaConfig::new(5, 10, 0.5, 0.2, 0),
            ConfigError::ZeroGenerations,
        ),
        (
            GaConfig::new(5, 10, 0.5, 1.5, 10),
            ConfigError::MutationRatioOutOfRange(1.5),
        ),
        (
            GaConfig::new(5, 10, 0.0, 0.2, 10),
            ConfigError::EliteRatioOutOfRange(0.0),
        ),
    ];

    for (config, expected) in cases {
        let err = GaRunner::run(&matrix, &config, &mut rng).unwrap_err();
        assert_eq!(err, GaError::Config(expected));
    }
}
