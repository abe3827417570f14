//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.
//! Unlike most presets-driven configurations there is no `Default`: every
//! core parameter has to be chosen by the caller.

use crate::error::ConfigError;

/// Tolerance used when checking that the breeding pool size is integral.
const POOL_EPSILON: f64 = 1e-9;

/// Configuration for the tour-search genetic algorithm.
///
/// # Size conservation
///
/// Each generation breeds a pool of `population_size / elite_ratio` tours
/// (the current population plus [`n_child`](Self::n_child) offspring) and
/// keeps `elite_ratio` of it, which is exactly `population_size` again.
///
/// # Examples
///
/// ```
/// use tour_ga::ga::GaConfig;
///
/// let config = GaConfig::new(8, 100, 0.25, 0.2, 20).with_oracle(false);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.pool_size().unwrap(), 400);
/// assert_eq!(config.n_child().unwrap(), 300);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of locations; must match the distance matrix.
    pub n_cities: usize,

    /// Number of tours carried from one generation to the next.
    pub population_size: usize,

    /// Fraction of the breeding pool that survives elitist reduction, in `(0, 1]`.
    pub elite_ratio: f64,

    /// Fraction of the tour length used as the per-generation swap budget,
    /// in `[0, 1]`.
    pub mutation_ratio: f64,

    /// Generation cap; the initial population counts as generation 1.
    pub max_generation: usize,

    /// Whether to compute the exact optimum first and stop when it is matched.
    pub use_oracle: bool,
}

impl GaConfig {
    /// Creates a configuration with the oracle enabled.
    pub fn new(
        n_cities: usize,
        population_size: usize,
        elite_ratio: f64,
        mutation_ratio: f64,
        max_generation: usize,
    ) -> Self {
        Self {
            n_cities,
            population_size,
            elite_ratio,
            mutation_ratio,
            max_generation,
            use_oracle: true,
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the elite ratio.
    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio;
        self
    }

    /// Sets the mutation ratio.
    pub fn with_mutation_ratio(mut self, ratio: f64) -> Self {
        self.mutation_ratio = ratio;
        self
    }

    /// Sets the generation cap.
    pub fn with_max_generation(mut self, n: usize) -> Self {
        self.max_generation = n;
        self
    }

    /// Enables or disables the brute-force oracle as a stopping criterion.
    pub fn with_oracle(mut self, enabled: bool) -> Self {
        self.use_oracle = enabled;
        self
    }

    /// Size of the combined parent + offspring pool, `population_size / elite_ratio`.
    pub fn pool_size(&self) -> Result<usize, ConfigError> {
        self.check_elite_ratio()?;
        let pool = self.population_size as f64 / self.elite_ratio;
        let rounded = pool.round();
        if (pool - rounded).abs() > POOL_EPSILON * pool.max(1.0) {
            return Err(ConfigError::NonIntegralPool(pool));
        }
        Ok(rounded as usize)
    }

    /// Number of children bred per generation: `pool_size() - population_size`.
    ///
    /// This is the pool size minus the carried-over parents, not
    /// `population_size / elite_ratio` itself. Counting the pool as parents
    /// plus children is what makes elitist reduction land back on exactly
    /// `population_size`.
    pub fn n_child(&self) -> Result<usize, ConfigError> {
        Ok(self.pool_size()?.saturating_sub(self.population_size))
    }

    fn check_elite_ratio(&self) -> Result<(), ConfigError> {
        if !(self.elite_ratio > 0.0 && self.elite_ratio <= 1.0) {
            return Err(ConfigError::EliteRatioOutOfRange(self.elite_ratio));
        }
        Ok(())
    }

    /// Validates the configuration.
    ///
    /// Matrix-dependent checks (`n_cities` against the matrix dimension) are
    /// done by the runner.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.max_generation == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        self.check_elite_ratio()?;
        if !(0.0..=1.0).contains(&self.mutation_ratio) {
            return Err(ConfigError::MutationRatioOutOfRange(self.mutation_ratio));
        }
        // Survivors are floor(elite_ratio * pool) == population_size >= 2,
        // so an integral pool also rules out a collapse to zero survivors.
        self.pool_size()?;
        Ok(())
    }
}
