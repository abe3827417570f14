//! Chromosome representation.
//!
//! A [`Tour`] is an owned permutation of location indices `0..n`. Every
//! operator in this crate that produces or modifies a tour keeps that
//! invariant.

/// An ordered visiting sequence; a permutation of `0..n`.
pub type Tour = Vec<usize>;

/// The tours under consideration in one generation.
pub type Population = Vec<Tour>;

/// Returns `true` if `tour` contains every index of `0..n` exactly once.
pub fn is_permutation(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &gene in tour {
        if gene >= n || seen[gene] {
            return false;
        }
        seen[gene] = true;
    }
    true
}
