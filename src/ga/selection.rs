//! Roulette-wheel (fitness-proportionate) parent selection.
//!
//! Selection probability is inversely proportional to tour length, so
//! shorter tours are picked more often. All functions assume
//! **minimization** and strictly positive fitness values.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use crate::error::GaError;
use rand::Rng;

/// Normalized inverse-fitness weights: `(1/f[i]) / Σ(1/f[j])`.
///
/// Returns [`GaError::ZeroFitness`] for the first zero entry, since its
/// inverse is undefined. The runner treats a zero-length tour as the optimum
/// and stops before it gets here. Negative or non-finite entries, and inputs
/// whose inverse sum overflows, give [`GaError::InvalidFitness`].
///
/// # Examples
///
/// ```
/// use tour_ga::ga::roulette_weights;
///
/// let w = roulette_weights(&[10.0, 20.0, 40.0]).unwrap();
/// assert!((w[0] - 4.0 / 7.0).abs() < 1e-12);
/// assert!((w.iter().sum::<f64>() - 1.0).abs() < 1e-12);
/// ```
pub fn roulette_weights(fitnesses: &[f64]) -> Result<Vec<f64>, GaError> {
    if let Some(i) = fitnesses.iter().position(|&f| f == 0.0) {
        return Err(GaError::ZeroFitness(i));
    }

    if let Some((index, &value)) = fitnesses
        .iter()
        .enumerate()
        .find(|(_, f)| !f.is_finite() || **f < 0.0)
    {
        return Err(GaError::InvalidFitness { index, value });
    }

    let inverse: Vec<f64> = fitnesses.iter().map(|&f| 1.0 / f).collect();
    let total: f64 = inverse.iter().sum();
    if !total.is_finite() {
        // Subnormal fitness values invert to infinity
        let index = inverse.iter().position(|w| !w.is_finite()).unwrap_or(0);
        return Err(GaError::InvalidFitness {
            index,
            value: fitnesses[index],
        });
    }
    Ok(inverse.into_iter().map(|w| w / total).collect())
}

/// Draws two distinct parent indices using `weights` as sampling weights.
///
/// The first index is drawn from the full wheel; the second from the wheel
/// with the first removed (sampling without replacement within the pair).
/// Separate calls are independent.
///
/// # Panics
/// Panics if fewer than two weights are given.
pub fn select_parents<R: Rng>(weights: &[f64], rng: &mut R) -> (usize, usize) {
    assert!(
        weights.len() >= 2,
        "need at least two individuals to pick distinct parents"
    );

    let first = spin(weights, None, rng);
    let second = spin(weights, Some(first), rng);
    (first, second)
}

/// One spin of the wheel, optionally with one slot removed.
fn spin<R: Rng>(weights: &[f64], excluded: Option<usize>, rng: &mut R) -> usize {
    let candidates: Vec<usize> = (0..weights.len())
        .filter(|&i| Some(i) != excluded)
        .collect();
    let total: f64 = candidates.iter().map(|&i| weights[i]).sum();

    if total <= 0.0 || !total.is_finite() {
        return candidates[rng.random_range(0..candidates.len())];
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for &i in &candidates {
        cumulative += weights[i];
        if cumulative > threshold {
            return i;
        }
    }

    // floating-point fallback: last candidate with nonzero weight
    candidates
        .iter()
        .rev()
        .copied()
        .find(|&i| weights[i] > 0.0)
        .unwrap_or(candidates[candidates.len() - 1])
}
