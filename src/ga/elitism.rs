//! Elitist survivor selection.
//!
//! The next generation is the fittest fraction of the combined pool of
//! parents and offspring. Because parents compete alongside their children,
//! the best tour found so far is only ever displaced by a strictly better
//! one, so the best fitness never regresses between generations.

use super::types::{Population, Tour};

/// Absorbs representation error in `ratio × len` (e.g. `0.2 × 500`).
const COUNT_EPSILON: f64 = 1e-9;

/// Number of survivors kept from a pool of `len`: `floor(ratio × len)`.
pub fn elite_count(len: usize, ratio: f64) -> usize {
    (ratio * len as f64 + COUNT_EPSILON).floor() as usize
}

/// Sorts the pool by ascending fitness and keeps the top
/// `floor(elite_ratio × |population|)` tours with their fitnesses.
///
/// The sort is stable: among equal fitnesses, earlier pool members come first.
///
/// # Panics
/// Panics if `population` and `fitnesses` differ in length.
pub fn reduce(
    population: Population,
    fitnesses: &[f64],
    elite_ratio: f64,
) -> (Population, Vec<f64>) {
    assert_eq!(
        population.len(),
        fitnesses.len(),
        "population and fitnesses must have equal length"
    );

    let keep = elite_count(population.len(), elite_ratio);

    let mut ranked: Vec<(usize, f64)> = fitnesses.iter().copied().enumerate().collect();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    ranked.truncate(keep);

    let mut slots: Vec<Option<Tour>> = population.into_iter().map(Some).collect();
    ranked
        .into_iter()
        .filter_map(|(i, f)| slots[i].take().map(|tour| (tour, f)))
        .unzip()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_the_best() {
        let population: Population = (0..5).map(|i| vec![i]).collect();
        let (survivors, fitnesses) = reduce(population, &[5.0, 3.0, 9.0, 1.0, 7.0], 0.4);
        assert_eq!(fitnesses, vec![1.0, 3.0]);
        assert_eq!(survivors, vec![vec![3], vec![1]]);
    }

    #[test]
    fn test_stable_among_ties() {
        let population: Population = (0..4).map(|i| vec![i]).collect();
        let (survivors, _) = reduce(population, &[2.0, 1.0, 2.0, 1.0], 0.75);
        assert_eq!(survivors, vec![vec![1], vec![3], vec![0]]);
    }

    #[test]
    fn test_ratio_one_keeps_everything_sorted() {
        let population: Population = (0..3).map(|i| vec![i]).collect();
        let (survivors, fitnesses) = reduce(population, &[3.0, 1.0, 2.0], 1.0);
        assert_eq!(fitnesses, vec![1.0, 2.0, 3.0]);
        assert_eq!(survivors.len(), 3);
    }

    #[test]
    fn test_elite_count_floors() {
        assert_eq!(elite_count(5, 0.4), 2);
        assert_eq!(elite_count(433, 0.3), 129);
        assert_eq!(elite_count(500, 0.2), 100);
        assert_eq!(elite_count(3, 0.1), 0);
    }

    #[test]
    fn test_size_conservation() {
        // pool = population_size / elite_ratio
        for (size, ratio) in [(100usize, 0.25), (100, 0.2), (30, 0.5), (10, 1.0)] {
            let pool = (size as f64 / ratio).round() as usize;
            let population: Population = (0..pool).map(|i| vec![i]).collect();
            let fitnesses: Vec<f64> = (0..pool).map(|i| (pool - i) as f64).collect();
            let (survivors, kept) = reduce(population, &fitnesses, ratio);
            assert_eq!(survivors.len(), size);
            assert_eq!(kept.len(), size);
        }
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn test_length_mismatch_panics() {
        reduce(vec![vec![0]], &[1.0, 2.0], 0.5);
    }
}
