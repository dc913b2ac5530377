//! The strategy contract consumed by external callers.
//!
//! A [`PathFinder`] is any tour-generation strategy over a fixed set of
//! [`Point`]s: callers advance it one round at a time and read back the
//! best tour and [`PathfinderStats`]. Rendering loops and CLI drivers
//! depend only on this trait, never on a concrete strategy.

use crate::error::ColonyError;
use std::time::Duration;

/// A named 2-D point. Immutable once loaded.
///
/// `name` is expected to be unique across the input set; duplicates are
/// not validated here and make the reported tours ambiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Unique display name, e.g. a station identifier.
    pub name: String,
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(name: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

/// Progress statistics for a running pathfinder.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathfinderStats {
    /// Total tours generated since the last reset.
    pub paths_generated: usize,

    /// Wall-clock time since construction or the last reset.
    pub run_time: Duration,

    /// Raw length of the best tour found since the last reset.
    pub shortest_path: f64,
}

/// A tour-generation strategy over a fixed point set.
///
/// Implementations improve their best known tour one round at a time.
/// Between rounds the strategy is quiescent: stopping the optimizer means
/// simply not calling [`run_round`](PathFinder::run_round) again — there
/// is no mid-round cancellation.
pub trait PathFinder {
    /// Advances the optimizer by one generation.
    ///
    /// Errors only on an internal invariant violation; a failed round
    /// indicates a bug, not a condition worth retrying.
    fn run_round(&mut self) -> Result<(), ColonyError>;

    /// Ordered point names of the best tour found since the last reset.
    ///
    /// Returns [`ColonyError::NoCompletedRound`] until a round has run.
    fn best_path(&self) -> Result<Vec<String>, ColonyError>;

    /// Statistics for the run so far.
    ///
    /// Returns [`ColonyError::NoCompletedRound`] until a round has run.
    fn stats(&self) -> Result<PathfinderStats, ColonyError>;

    /// All points, in their original input order.
    fn positions(&self) -> &[Point];

    /// Clears all learned state and counters; the points are unchanged.
    fn reset(&mut self);
}

/// A persisted best-tour record: the payload a driver writes to disk
/// whenever a new best is found.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TourSnapshot {
    /// Raw length of the tour.
    pub distance: f64,
    /// Point names in visiting order.
    pub stations: Vec<String>,
}

#[cfg(feature = "serde")]
impl TourSnapshot {
    /// Captures the current best tour of a pathfinder.
    pub fn capture<P: PathFinder + ?Sized>(finder: &P) -> Result<Self, ColonyError> {
        Ok(Self {
            distance: finder.stats()?.shortest_path,
            stations: finder.best_path()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_right_triangle() {
        let a = Point::new("A", 0, 0);
        let b = Point::new("B", 3, 4);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let a = Point::new("A", 7, -2);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_distance_negative_coordinates() {
        let a = Point::new("A", -10, 0);
        let b = Point::new("B", 10, 0);
        assert!((a.distance_to(&b) - 20.0).abs() < 1e-12);
    }
}
