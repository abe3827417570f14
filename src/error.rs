//! Error types.
//!
//! [`ConfigError`] covers everything that can be rejected before a run
//! starts; [`GaError`] is what the engine returns and wraps it.

use thiserror::Error;

/// Invalid configuration or malformed distance matrix.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("distance matrix must have at least one location")]
    EmptyMatrix,

    #[error("distance matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("distance matrix entry [{row}][{col}] = {value} is negative or not finite")]
    InvalidDistance { row: usize, col: usize, value: f64 },

    #[error("distance matrix diagonal entry [{index}][{index}] = {value} must be zero")]
    NonZeroDiagonal { index: usize, value: f64 },

    #[error("distance matrix is asymmetric at [{row}][{col}]: {forward} != {backward}")]
    Asymmetric {
        row: usize,
        col: usize,
        forward: f64,
        backward: f64,
    },

    #[error("n_cities is {n_cities} but the distance matrix has {matrix_len} locations")]
    CityCountMismatch { n_cities: usize, matrix_len: usize },

    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    #[error("max_generation must be at least 1")]
    ZeroGenerations,

    #[error("elite_ratio must lie in (0, 1], got {0}")]
    EliteRatioOutOfRange(f64),

    #[error("mutation_ratio must lie in [0, 1], got {0}")]
    MutationRatioOutOfRange(f64),

    #[error("population_size / elite_ratio = {0} is not an integral pool size")]
    NonIntegralPool(f64),
}

/// Errors raised by the search engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GaError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("tour of length {tour_len} does not fit a matrix of {matrix_len} locations")]
    DimensionMismatch { tour_len: usize, matrix_len: usize },

    #[error("gene {gene} is out of range for {n} locations")]
    InvalidGene { gene: usize, n: usize },

    #[error("open-path length of tour {tour:?} is not finite")]
    NonFiniteFitness { tour: Vec<usize> },

    #[error("roulette weights need finite positive fitness, got {value} at index {index}")]
    InvalidFitness { index: usize, value: f64 },

    #[error("roulette weights are undefined for zero fitness at index {0}")]
    ZeroFitness(usize),

    #[error("brute-force oracle refuses {n} locations (limit is {limit})")]
    OracleTooLarge { n: usize, limit: usize },
}
