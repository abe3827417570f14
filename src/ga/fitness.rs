//! Fitness evaluation.
//!
//! The fitness of a tour is the length of the **open** path it describes:
//! the sum of distances between consecutive locations, with no edge from the
//! last location back to the first. Lower is better.

use super::types::Tour;
use crate::error::GaError;
use crate::matrix::DistanceMatrix;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Open-path length of `tour` under `matrix`.
///
/// Fails with [`GaError::DimensionMismatch`] if the tour length differs from
/// the matrix dimension, [`GaError::InvalidGene`] if a gene is out of range,
/// and [`GaError::NonFiniteFitness`] if the sum overflows.
///
/// # Examples
///
/// ```
/// use tour_ga::DistanceMatrix;
/// use tour_ga::ga::fitness;
///
/// let m = DistanceMatrix::new(vec![
///     vec![0.0, 2.0, 9.0],
///     vec![2.0, 0.0, 6.0],
///     vec![9.0, 6.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(fitness(&[0, 1, 2], &m).unwrap(), 8.0);
/// ```
pub fn fitness(tour: &[usize], matrix: &DistanceMatrix) -> Result<f64, GaError> {
    let n = matrix.len();
    if tour.len() != n {
        return Err(GaError::DimensionMismatch {
            tour_len: tour.len(),
            matrix_len: n,
        });
    }
    if let Some(&gene) = tour.iter().find(|&&gene| gene >= n) {
        return Err(GaError::InvalidGene { gene, n });
    }

    let length: f64 = tour
        .windows(2)
        .map(|edge| matrix.distance(edge[0], edge[1]))
        .sum();
    if !length.is_finite() {
        return Err(GaError::NonFiniteFitness { tour: tour.to_vec() });
    }
    Ok(length)
}

/// Evaluates every tour, preserving population order.
pub fn compute_fitnesses(population: &[Tour], matrix: &DistanceMatrix) -> Result<Vec<f64>, GaError> {
    #[cfg(feature = "parallel")]
    {
        population
            .par_iter()
            .map(|tour| fitness(tour, matrix))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        population.iter().map(|tour| fitness(tour, matrix)).collect()
    }
}
