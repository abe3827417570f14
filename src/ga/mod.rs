//! Genetic Algorithm for open-path tours.
//!
//! Searches for a short visiting order over the locations of a
//! [`DistanceMatrix`](crate::DistanceMatrix). Candidate solutions are
//! permutations ([`Tour`]); fitness is the open-path length (lower is better).
//!
//! # Pipeline
//!
//! Each generation runs, in order:
//!
//! 1. [`compute_fitnesses`] over the current population
//! 2. [`roulette_weights`] (inverse-fitness roulette wheel)
//! 3. breeding: `n_child` children via [`select_parents`] +
//!    [`two_point_crossover`], appended to the retained parents
//! 4. [`swap_mutation`] over the combined pool
//! 5. [`compute_fitnesses`] over the pool
//! 6. [`reduce`] back to `population_size` by elitism
//!
//! [`GaRunner`] drives the loop until the best fitness matches the
//! brute-force optimum from [`find_optimal`] or `max_generation` is reached.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

mod config;
pub mod elitism;
mod fitness;
pub mod operators;
pub mod oracle;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use elitism::reduce;
pub use fitness::{compute_fitnesses, fitness};
pub use operators::{initial_population, swap_mutation, two_point_crossover, two_point_crossover_at};
pub use oracle::{find_optimal, find_optimal_tour, MAX_ORACLE_CITIES};
pub use runner::{GaResult, GaRunner, GenerationStats, Termination};
pub use selection::{roulette_weights, select_parents};
pub use types::{is_permutation, Population, Tour};
