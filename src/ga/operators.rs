//! Permutation-based genetic operators.
//!
//! Initialization, crossover and mutation for [`Tour`] chromosomes. Every
//! operator here returns or leaves behind valid permutations of `0..n`.
//!
//! # Operators
//!
//! - [`initial_population`]: independent uniformly random permutations
//! - [`two_point_crossover`]: order-preserving two-point crossover, returns a new tour
//! - [`swap_mutation`]: a population-wide budget of random swaps, in place
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

use super::types::{Population, Tour};
use rand::seq::{index, SliceRandom};
use rand::Rng;

// ============================================================================
// Initialization
// ============================================================================

/// Creates `size` tours over `0..n`, each shuffled independently.
///
/// Every tour is its own buffer; no two population members alias.
pub fn initial_population<R: Rng>(size: usize, n: usize, rng: &mut R) -> Population {
    (0..size)
        .map(|_| {
            let mut tour: Tour = (0..n).collect();
            tour.shuffle(rng);
            tour
        })
        .collect()
}

// ============================================================================
// Crossover
// ============================================================================

/// Two-point order-preserving crossover with random cut points.
///
/// Picks two distinct cut indices uniformly from `0..n`, sorts them into
/// `start < end` and applies [`two_point_crossover_at`].
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn two_point_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Tour {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    if n == 1 {
        return parent1.to_vec();
    }

    let (start, end) = random_cut_points(n, rng);
    two_point_crossover_at(parent1, parent2, start, end)
}

/// Two-point crossover with fixed cut points.
///
/// # Algorithm
///
/// 1. Copy `parent1[start..end]` into the child at the same positions
/// 2. Build a working list: `parent2` in its own order, minus the copied genes
/// 3. Fill child positions `0..start`, then `end..n`, popping from the front
///    of the working list
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or `start > end` or `end > n`.
pub fn two_point_crossover_at(
    parent1: &[usize],
    parent2: &[usize],
    start: usize,
    end: usize,
) -> Tour {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(start <= end && end <= n, "invalid cut points {start}..{end} for length {n}");

    let mut inherited = vec![false; n];
    for &gene in &parent1[start..end] {
        inherited[gene] = true;
    }
    let mut remaining = parent2.iter().copied().filter(|&gene| !inherited[gene]);

    let mut child = Vec::with_capacity(n);
    child.extend(remaining.by_ref().take(start));
    child.extend_from_slice(&parent1[start..end]);
    child.extend(remaining);
    child
}

/// Picks two distinct indices in `0..n` and returns them sorted.
fn random_cut_points<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let picked = index::sample(rng, n, 2);
    let (a, b) = (picked.index(0), picked.index(1));
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Mutation
// ============================================================================

/// Applies a global budget of `floor(n × mutation_ratio)` swaps to the
/// population, where `n` is the tour length.
///
/// Each swap picks a tour uniformly at random (with replacement across swaps)
/// and exchanges two distinct positions within it. The budget is shared by
/// the whole population rather than applied per tour, so some tours may be
/// swapped several times and others not at all.
///
/// # Complexity
/// O(budget)
pub fn swap_mutation<R: Rng>(population: &mut [Tour], mutation_ratio: f64, rng: &mut R) {
    let Some(n) = population.first().map(Vec::len) else {
        return;
    };
    if n < 2 {
        return;
    }

    let budget = (n as f64 * mutation_ratio).floor() as usize;
    for _ in 0..budget {
        let target = rng.random_range(0..population.len());
        let picked = index::sample(rng, n, 2);
        population[target].swap(picked.index(0), picked.index(1));
    }
}

// ============================================================================
// Tests
// ============================================================================
