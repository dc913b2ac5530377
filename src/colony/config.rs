//! Colony configuration.

use crate::error::ColonyError;

/// Configuration for the ant colony.
///
/// Pheromone acts as a discount on perceived edge distance: an ant
/// evaluating an edge sees `(1 - pheromone_level) * distance`, so a higher
/// level pulls ants more strongly toward that edge.
///
/// # Examples
///
/// ```
/// use wirepath::colony::ColonyConfig;
///
/// let config = ColonyConfig::default()
///     .with_ant_count(8)
///     .with_pheromone_decay(0.01)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ColonyConfig {
    /// Number of ants dispatched per round.
    pub ant_count: usize,

    /// Upper clamp on any edge's pheromone level, and therefore the
    /// maximum discount an edge's distance can receive. Must stay within
    /// `[0, 1]`: above 1 the discounted distance turns negative and the
    /// greedy selection inverts.
    pub max_pheromone_factor: f64,

    /// Pheromone added along the best tour in the direction of travel.
    pub pheromone_spread_forward: f64,

    /// Pheromone added along the best tour in the reverse direction.
    pub pheromone_spread_backward: f64,

    /// Pheromone removed each round from every edge leaving a node on the
    /// best tour, clamped at 0.
    pub pheromone_decay: f64,

    /// Dispatch ants on the rayon thread pool. Sequential dispatch gives
    /// the same results; this only trades wall-clock time.
    pub parallel: bool,

    /// Random seed for reproducibility. With a fixed seed, two runs over
    /// the same points produce bit-identical tours.
    pub seed: Option<u64>,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            ant_count: 4,
            max_pheromone_factor: 0.6,
            pheromone_spread_forward: 0.01,
            pheromone_spread_backward: 0.01,
            pheromone_decay: 0.005,
            parallel: true,
            seed: None,
        }
    }
}

impl ColonyConfig {
    pub fn with_ant_count(mut self, n: usize) -> Self {
        self.ant_count = n;
        self
    }

    pub fn with_max_pheromone_factor(mut self, f: f64) -> Self {
        self.max_pheromone_factor = f;
        self
    }

    pub fn with_pheromone_spread_forward(mut self, f: f64) -> Self {
        self.pheromone_spread_forward = f;
        self
    }

    pub fn with_pheromone_spread_backward(mut self, f: f64) -> Self {
        self.pheromone_spread_backward = f;
        self
    }

    pub fn with_pheromone_decay(mut self, f: f64) -> Self {
        self.pheromone_decay = f;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ColonyError> {
        if self.ant_count == 0 {
            return Err(ColonyError::InvalidConfig("ant_count must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.max_pheromone_factor) {
            return Err(ColonyError::InvalidConfig(format!(
                "max_pheromone_factor must be in [0, 1], got {}",
                self.max_pheromone_factor
            )));
        }
        if self.pheromone_spread_forward < 0.0 {
            return Err(ColonyError::InvalidConfig(format!(
                "pheromone_spread_forward must be non-negative, got {}",
                self.pheromone_spread_forward
            )));
        }
        if self.pheromone_spread_backward < 0.0 {
            return Err(ColonyError::InvalidConfig(format!(
                "pheromone_spread_backward must be non-negative, got {}",
                self.pheromone_spread_backward
            )));
        }
        if self.pheromone_decay < 0.0 {
            return Err(ColonyError::InvalidConfig(format!(
                "pheromone_decay must be non-negative, got {}",
                self.pheromone_decay
            )));
        }
        Ok(())
    }
}
