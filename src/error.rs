//! Error type shared by pathfinder strategies.

use thiserror::Error;

/// Failures surfaced by colony construction and round execution.
///
/// None of these are retryable: a failed round indicates a logic defect
/// in the caller or the engine, not a transient condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColonyError {
    /// The configuration was rejected at construction.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An ant ran out of unvisited neighbours before completing its tour.
    ///
    /// On a complete graph this can only happen if the stepping loop runs
    /// more times than `point_count - 1`, so it is propagated as a hard
    /// failure of the whole round rather than ignored per ant.
    #[error("ant at position {position} found no unvisited neighbour at step {step}")]
    NoUnvisitedNeighbour {
        /// Node index the ant was standing on.
        position: usize,
        /// Step cursor at the time of the failure.
        step: usize,
    },

    /// Statistics or the best path were requested before any round ran.
    #[error("no round has completed yet")]
    NoCompletedRound,
}
