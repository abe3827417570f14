//! Symmetric distance matrix.
//!
//! [`DistanceMatrix`] is validated once on construction and is read-only
//! afterwards. Every engine component borrows it; none can mutate it.

use crate::error::ConfigError;
use rand::Rng;

/// An n×n table of nonnegative distances with a zero diagonal and
/// `d[i][j] == d[j][i]`.
///
/// # Examples
///
/// ```
/// use tour_ga::DistanceMatrix;
///
/// let m = DistanceMatrix::new(vec![
///     vec![0.0, 2.0, 9.0],
///     vec![2.0, 0.0, 6.0],
///     vec![9.0, 6.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(m.len(), 3);
/// assert_eq!(m.distance(1, 2), 6.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>"))]
pub struct DistanceMatrix {
    n: usize,
    // Row-major, n * n entries.
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds a matrix from rows, rejecting anything that is not square,
    /// nonnegative, zero on the diagonal and symmetric.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, ConfigError> {
        let n = rows.len();
        if n == 0 {
            return Err(ConfigError::EmptyMatrix);
        }

        let mut data = Vec::with_capacity(n * n);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != n {
                return Err(ConfigError::NotSquare {
                    row,
                    len: values.len(),
                    expected: n,
                });
            }
            data.extend(values);
        }

        let matrix = Self { n, data };
        matrix.check_entries()?;
        Ok(matrix)
    }

    fn check_entries(&self) -> Result<(), ConfigError> {
        for row in 0..self.n {
            for col in 0..self.n {
                let value = self.distance(row, col);
                if !value.is_finite() || value < 0.0 {
                    return Err(ConfigError::InvalidDistance { row, col, value });
                }
            }
            let diag = self.distance(row, row);
            if diag != 0.0 {
                return Err(ConfigError::NonZeroDiagonal { index: row, value: diag });
            }
        }
        for row in 0..self.n {
            for col in (row + 1)..self.n {
                let forward = self.distance(row, col);
                let backward = self.distance(col, row);
                if forward != backward {
                    return Err(ConfigError::Asymmetric {
                        row,
                        col,
                        forward,
                        backward,
                    });
                }
            }
        }
        Ok(())
    }

    /// Generates a random symmetric matrix with integer-valued distances
    /// drawn uniformly from `0..max_distance`.
    ///
    /// The upper triangle is sampled and mirrored into the lower one; the
    /// diagonal is zero. Off-diagonal zeros are allowed.
    ///
    /// # Panics
    /// Panics if `n == 0` or `max_distance == 0`.
    pub fn random<R: Rng>(n: usize, max_distance: u32, rng: &mut R) -> Self {
        assert!(n > 0, "matrix must have at least one location");
        assert!(max_distance > 0, "max_distance must be positive");

        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = rng.random_range(0..max_distance) as f64;
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { n, data }
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always `false`: construction rejects empty matrices.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance from `from` to `to`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        assert!(from < self.n && to < self.n, "location index out of range");
        self.data[from * self.n + to]
    }

    /// Iterates over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks(self.n)
    }
}

impl TryFrom<Vec<Vec<f64>>> for DistanceMatrix {
    type Error = ConfigError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<DistanceMatrix> for Vec<Vec<f64>> {
    fn from(matrix: DistanceMatrix) -> Self {
        matrix.rows().map(<[f64]>::to_vec).collect()
    }
}

impl std::fmt::Display for DistanceMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self
            .data
            .iter()
            .map(|d| format!("{d}").len())
            .max()
            .unwrap_or(1);
        for row in self.rows() {
            let cells: Vec<String> = row.iter().map(|d| format!("{d:>width$}")).collect();
            writeln!(f, "| {} |", cells.join(" | "))?;
        }
        Ok(())
    }
}
