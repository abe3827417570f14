//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation →
//! evaluation → elitist reduction → repeat.

use super::config::GaConfig;
use super::elitism;
use super::fitness::compute_fitnesses;
use super::operators::{initial_population, swap_mutation, two_point_crossover};
use super::oracle::find_optimal;
use super::selection::{roulette_weights, select_parents};
use super::types::{Population, Tour};
use crate::error::{ConfigError, GaError};
use crate::matrix::DistanceMatrix;
use rand::Rng;
use std::time::{Duration, Instant};

/// Relative tolerance when comparing the best fitness with the oracle
/// optimum; the same path summed in reverse can differ in the last bits.
const TARGET_TOLERANCE: f64 = 1e-9;

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The best fitness matched the target optimum, or reached zero.
    Converged,
    /// The generation counter reached `max_generation`.
    Exhausted,
}

/// Diagnostics for one generation.
///
/// Reported once for the initial population (generation 1) and once after
/// each loop iteration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation index, starting at 1.
    pub generation: usize,

    /// A shortest tour in the current population.
    pub best_tour: Tour,

    /// Fitness of `best_tour`.
    pub best_fitness: f64,

    /// Mean fitness of the current population.
    pub mean_fitness: f64,
}

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best tour in the final population.
    pub best: Tour,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Total number of generations, counting the initial population.
    pub generations: usize,

    /// Terminal state of the loop.
    pub termination: Termination,

    /// The optimum the run was compared against, if any.
    pub optimal_fitness: Option<f64>,

    /// Best fitness at each generation; `fitness_history.len() == generations`.
    pub fitness_history: Vec<f64>,

    /// Wall-clock time spent in the loop (excluding the oracle).
    pub elapsed: Duration,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use tour_ga::ga::{GaConfig, GaRunner};
/// use tour_ga::random::create_rng;
/// use tour_ga::DistanceMatrix;
///
/// let mut rng = create_rng(42);
/// let matrix = DistanceMatrix::random(6, 30, &mut rng);
/// let config = GaConfig::new(6, 20, 0.5, 0.2, 30);
/// let result = GaRunner::run(&matrix, &config, &mut rng).unwrap();
/// assert!(result.best_fitness >= result.optimal_fitness.unwrap());
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA, computing the brute-force optimum first when
    /// `config.use_oracle` is set.
    pub fn run<R: Rng>(
        matrix: &DistanceMatrix,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult, GaError> {
        let target = if config.use_oracle {
            Some(find_optimal(matrix)?)
        } else {
            None
        };
        Self::run_with_target(matrix, config, target, rng, |_| {})
    }

    /// Runs the GA against a precomputed target fitness, calling `observer`
    /// with each generation's diagnostics.
    ///
    /// Computing the optimum once and passing it here lets several trials
    /// share one oracle call. `config.use_oracle` is ignored.
    pub fn run_with_target<R, F>(
        matrix: &DistanceMatrix,
        config: &GaConfig,
        target: Option<f64>,
        rng: &mut R,
        mut observer: F,
    ) -> Result<GaResult, GaError>
    where
        R: Rng,
        F: FnMut(&GenerationStats),
    {
        config.validate()?;
        if config.n_cities != matrix.len() {
            return Err(ConfigError::CityCountMismatch {
                n_cities: config.n_cities,
                matrix_len: matrix.len(),
            }
            .into());
        }
        let n_child = config.n_child()?;
        let started = Instant::now();

        // 1. Initialize and evaluate
        let mut population = initial_population(config.population_size, config.n_cities, rng);
        let mut fitnesses = compute_fitnesses(&population, matrix)?;
        let mut generation = 1;

        let mut stats = generation_stats(generation, &population, &fitnesses);
        let mut fitness_history = Vec::with_capacity(config.max_generation);
        report(&stats, &mut fitness_history, &mut observer);

        // 2. Evolutionary loop
        while generation < config.max_generation && !reached(stats.best_fitness, target) {
            // Selection weights are undefined at zero fitness; `reached` has
            // already stopped the loop in that case.
            fitnesses = compute_fitnesses(&population, matrix)?;
            let weights = roulette_weights(&fitnesses)?;

            let mut pool = breed(population, &weights, n_child, rng);
            swap_mutation(&mut pool, config.mutation_ratio, rng);
            let pool_fitnesses = compute_fitnesses(&pool, matrix)?;

            (population, fitnesses) = elitism::reduce(pool, &pool_fitnesses, config.elite_ratio);
            generation += 1;

            stats = generation_stats(generation, &population, &fitnesses);
            report(&stats, &mut fitness_history, &mut observer);
        }

        let termination = if reached(stats.best_fitness, target) {
            Termination::Converged
        } else {
            Termination::Exhausted
        };
        let elapsed = started.elapsed();
        log::info!(
            "terminated ({termination:?}) after {generation} generations in {} ms, best fitness {}",
            elapsed.as_millis(),
            stats.best_fitness
        );

        Ok(GaResult {
            best: stats.best_tour,
            best_fitness: stats.best_fitness,
            generations: generation,
            termination,
            optimal_fitness: target,
            fitness_history,
            elapsed,
        })
    }
}

/// Keeps the parents and appends `n_child` crossover offspring, each from a
/// pair of distinct roulette-selected parents.
fn breed<R: Rng>(parents: Population, weights: &[f64], n_child: usize, rng: &mut R) -> Population {
    let children: Vec<Tour> = (0..n_child)
        .map(|_| {
            let (p1, p2) = select_parents(weights, rng);
            two_point_crossover(&parents[p1], &parents[p2], rng)
        })
        .collect();

    let mut pool = parents;
    pool.extend(children);
    pool
}

/// Whether `best` counts as optimal: zero length, or matching the target.
fn reached(best: f64, target: Option<f64>) -> bool {
    best == 0.0
        || target.is_some_and(|t| best <= t || best - t <= TARGET_TOLERANCE * t.abs().max(1.0))
}

fn generation_stats(generation: usize, population: &[Tour], fitnesses: &[f64]) -> GenerationStats {
    let (best_idx, best_fitness) = fitnesses
        .iter()
        .copied()
        .enumerate()
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .unwrap_or((0, f64::INFINITY));
    let mean_fitness = fitnesses.iter().sum::<f64>() / fitnesses.len().max(1) as f64;

    GenerationStats {
        generation,
        best_tour: population.get(best_idx).cloned().unwrap_or_default(),
        best_fitness,
        mean_fitness,
    }
}

fn report<F: FnMut(&GenerationStats)>(
    stats: &GenerationStats,
    history: &mut Vec<f64>,
    observer: &mut F,
) {
    log::debug!(
        "generation {}: best {} (route {:?}), mean {}",
        stats.generation,
        stats.best_fitness,
        stats.best_tour,
        stats.mean_fitness
    );
    history.push(stats.best_fitness);
    observer(stats);
}

// ============================================================================
// Tests
// ============================================================================
