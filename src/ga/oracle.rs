//! Brute-force oracle.
//!
//! Exhaustive enumeration of every tour, used as ground truth and as the
//! convergence target of the runner on small instances. Never part of the
//! search itself.

use super::fitness::fitness;
use super::types::Tour;
use crate::error::GaError;
use crate::matrix::DistanceMatrix;
use itertools::Itertools;

/// Largest instance the oracle accepts (10! ≈ 3.6M tours).
pub const MAX_ORACLE_CITIES: usize = 10;

/// Exact optimum: the minimum open-path length over all permutations.
///
/// # Complexity
/// O(n · n!)
pub fn find_optimal(matrix: &DistanceMatrix) -> Result<f64, GaError> {
    find_optimal_tour(matrix).map(|(_, best)| best)
}

/// Like [`find_optimal`], also returning the first tour (in lexicographic
/// enumeration order) that attains the optimum.
pub fn find_optimal_tour(matrix: &DistanceMatrix) -> Result<(Tour, f64), GaError> {
    let n = matrix.len();
    if n > MAX_ORACLE_CITIES {
        return Err(GaError::OracleTooLarge {
            n,
            limit: MAX_ORACLE_CITIES,
        });
    }

    // `permutations` over distinct indices yields each ordering exactly once.
    let mut best: Option<(Tour, f64)> = None;
    for tour in (0..n).permutations(n) {
        let f = fitness(&tour, matrix)?;
        if best.as_ref().map_or(true, |(_, b)| f < *b) {
            best = Some((tour, f));
        }
    }

    let (tour, best_fitness) = best.unwrap_or_default();
    log::info!("oracle: optimal open-path length {best_fitness} over {n} locations");
    Ok((tour, best_fitness))
}
