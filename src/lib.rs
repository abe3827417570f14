//! Genetic-algorithm search for short open-path tours.
//!
//! Given a symmetric distance matrix over `n` locations, the crate searches
//! for a visiting order (a permutation of `0..n`) whose open path, without
//! the edge back to the start, is as short as possible.
//!
//! - [`DistanceMatrix`]: validated, immutable problem instance
//! - [`ga`]: the evolutionary engine (roulette-wheel selection,
//!   order-preserving two-point crossover, swap mutation, elitism) and the
//!   brute-force oracle used as a convergence target on small instances
//! - [`random`]: seedable generators; every sampling stage takes its RNG
//!   explicitly, so a fixed seed reproduces a run
//!
//! # Example
//!
//! ```
//! use tour_ga::ga::{GaConfig, GaRunner, Termination};
//! use tour_ga::random::create_rng;
//! use tour_ga::DistanceMatrix;
//!
//! let matrix = DistanceMatrix::new(vec![
//!     vec![0.0, 10.0, 15.0, 20.0],
//!     vec![10.0, 0.0, 35.0, 25.0],
//!     vec![15.0, 35.0, 0.0, 30.0],
//!     vec![20.0, 25.0, 30.0, 0.0],
//! ])?;
//! let config = GaConfig::new(4, 20, 0.5, 0.5, 100);
//! let result = GaRunner::run(&matrix, &config, &mut create_rng(42))?;
//! assert_eq!(result.termination, Termination::Converged);
//! # Ok::<(), tour_ga::GaError>(())
//! ```

pub mod error;
pub mod ga;
pub mod matrix;
pub mod random;

pub use error::{ConfigError, GaError};
pub use matrix::DistanceMatrix;
