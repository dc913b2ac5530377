//! Round execution and pheromone reinforcement.

use super::agent::Ant;
use super::config::ColonyConfig;
use super::graph::PositionGraph;
use crate::error::ColonyError;
use crate::pathfinder::{PathFinder, PathfinderStats, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::Instant;

/// Coordinates a population of ants over a shared position graph.
///
/// One call to [`run_round`](PathFinder::run_round) is one generation:
/// every ant walks a complete tour against the round's frozen pheromone
/// snapshot, the finished tours are ranked, the best-ever tour is updated,
/// and its edges are reinforced. Pheromones are only ever written here,
/// after all ants of the round have finished, so ants never race the
/// reinforcement phase.
///
/// # Usage
///
/// ```
/// use wirepath::colony::{AntColony, ColonyConfig};
/// use wirepath::{PathFinder, Point};
///
/// let points = vec![
///     Point::new("A", 0, 0),
///     Point::new("B", 10, 0),
///     Point::new("C", 10, 10),
/// ];
/// let mut colony = AntColony::new(points, ColonyConfig::default().with_seed(42)).unwrap();
/// colony.run_round().unwrap();
/// let best = colony.best_path().unwrap();
/// assert_eq!(best.len(), 3);
/// ```
pub struct AntColony {
    graph: PositionGraph,
    ants: Vec<Ant>,
    /// Best tour since the last reset, retired out of the active pool and
    /// never walked again. Its raw distance only ever decreases.
    best_ant: Option<Ant>,
    config: ColonyConfig,
    tours_generated: usize,
    start_time: Instant,
    rng: StdRng,
}

impl AntColony {
    /// Builds a colony over the given points.
    ///
    /// Fails on an invalid configuration or on fewer than two points (no
    /// closed tour exists over a single point).
    pub fn new(points: Vec<Point>, config: ColonyConfig) -> Result<Self, ColonyError> {
        config.validate()?;
        if points.len() < 2 {
            return Err(ColonyError::InvalidConfig(format!(
                "at least 2 points required, got {}",
                points.len()
            )));
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        Ok(Self {
            graph: PositionGraph::new(points),
            ants: vec![Ant::default(); config.ant_count],
            best_ant: None,
            config,
            tours_generated: 0,
            start_time: Instant::now(),
            rng,
        })
    }
}

impl PathFinder for AntColony {
    fn run_round(&mut self) -> Result<(), ColonyError> {
        let point_count = self.graph.len();

        // Start nodes are drawn up front from the coordinator RNG so a
        // fixed seed yields identical rounds under either dispatch mode.
        let starts: Vec<usize> = (0..self.ants.len())
            .map(|_| self.rng.random_range(0..point_count))
            .collect();

        // The graph is frozen for the duration of the round; every ant
        // reads the same pheromone snapshot. The iterator join is the
        // round barrier, and any ant failure aborts the whole round.
        let graph = &self.graph;
        if self.config.parallel {
            self.ants
                .par_iter_mut()
                .zip(starts.par_iter())
                .try_for_each(|(ant, &start)| ant.run_tour(graph, start))?;
        } else {
            for (ant, &start) in self.ants.iter_mut().zip(starts.iter()) {
                ant.run_tour(graph, start)?;
            }
        }

        self.ants.sort_by(|a, b| {
            a.travelled
                .partial_cmp(&b.travelled)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        if self
            .best_ant
            .as_ref()
            .is_none_or(|best| self.ants[0].travelled < best.travelled)
        {
            // Retire the winner into the best slot; a fresh ant takes its
            // place in the pool so the best tour is never walked again.
            let winner = std::mem::take(&mut self.ants[0]);
            self.best_ant = Some(winner);
        }

        if let Some(best) = &self.best_ant {
            reinforce_pheromones(&mut self.graph, &best.tour, &self.config);
        }

        self.tours_generated += self.ants.len();

        Ok(())
    }

    fn best_path(&self) -> Result<Vec<String>, ColonyError> {
        let best = self.best_ant.as_ref().ok_or(ColonyError::NoCompletedRound)?;
        Ok(best
            .tour
            .iter()
            .map(|&idx| self.graph.points()[idx].name.clone())
            .collect())
    }

    fn stats(&self) -> Result<PathfinderStats, ColonyError> {
        let best = self.best_ant.as_ref().ok_or(ColonyError::NoCompletedRound)?;
        Ok(PathfinderStats {
            paths_generated: self.tours_generated,
            run_time: self.start_time.elapsed(),
            shortest_path: best.travelled,
        })
    }

    fn positions(&self) -> &[Point] {
        self.graph.points()
    }

    fn reset(&mut self) {
        self.graph.clear_pheromones();
        self.best_ant = None;
        self.tours_generated = 0;
        self.start_time = Instant::now();
    }
}

/// Reinforces the edges of the best tour, wrapping the last node back to
/// the first.
///
/// Per tour node: decay all of its outgoing edges once, then raise the
/// forward edge toward the next tour node and the backward edge coming
/// the other way, each clamped at the configured maximum. This runs
/// strictly after the round barrier and is the only pheromone writer.
fn reinforce_pheromones(graph: &mut PositionGraph, tour: &[usize], config: &ColonyConfig) {
    for i in 0..tour.len() {
        let cur = tour[i];
        let next = tour[(i + 1) % tour.len()];

        graph.decay_pheromones(cur, config.pheromone_decay);
        graph.raise_pheromone(
            cur,
            next,
            config.pheromone_spread_forward,
            config.max_pheromone_factor,
        );
        graph.raise_pheromone(
            next,
            cur,
            config.pheromone_spread_backward,
            config.max_pheromone_factor,
        );
    }
}

// ============================================================================
// Tests
// ============================================================================
