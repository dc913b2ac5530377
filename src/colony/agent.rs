//! A single ant walking the position graph.

use super::graph::PositionGraph;
use crate::error::ColonyError;

/// One simulated ant: a visitation set, an ordered tour buffer, and
/// running distance totals.
///
/// An ant only ever reads the graph; pheromone writes happen between
/// rounds in the coordinator. Reset at the start of every round to a
/// fresh start node.
#[derive(Debug, Clone, Default)]
pub(crate) struct Ant {
    visited: Vec<bool>,
    /// Node indices in visiting order; `tour.len() == point count` once
    /// the walk completes.
    pub(crate) tour: Vec<usize>,
    step: usize,
    /// Raw tour length, including the closing edge.
    pub(crate) travelled: f64,
    /// Pheromone-discounted tour length, including the closing edge.
    pub(crate) weighted_travelled: f64,
}

impl Ant {
    /// Clears all state and places the ant on `start`.
    pub(crate) fn reset(&mut self, point_count: usize, start: usize) {
        self.tour.clear();
        self.tour.resize(point_count, 0);
        self.visited.clear();
        self.visited.resize(point_count, false);
        self.step = 0;
        self.travelled = 0.0;
        self.weighted_travelled = 0.0;
        self.tour[0] = start;
        self.visited[start] = true;
    }

    /// Node index the ant is currently standing on.
    pub(crate) fn current_position(&self) -> usize {
        self.tour[self.step]
    }

    /// Moves to the nearest unvisited neighbour by weighted distance.
    ///
    /// Candidates are examined in the graph's neighbour order and only a
    /// strictly smaller weighted distance displaces the current pick, so
    /// ties keep the earliest-seen neighbour. That selection order is
    /// observable in the resulting tours and must not change.
    pub(crate) fn step_to_next(&mut self, graph: &PositionGraph) -> Result<(), ColonyError> {
        let current = self.current_position();

        let mut best: Option<(usize, f64, f64)> = None;
        for edge in graph.neighbours(current) {
            if self.visited[edge.target] {
                continue;
            }
            let weighted = edge.weighted_distance();
            match best {
                Some((_, _, best_weighted)) if best_weighted <= weighted => {}
                _ => best = Some((edge.target, edge.distance, weighted)),
            }
        }

        let Some((target, distance, weighted)) = best else {
            return Err(ColonyError::NoUnvisitedNeighbour {
                position: current,
                step: self.step,
            });
        };

        self.step += 1;
        self.tour[self.step] = target;
        self.travelled += distance;
        self.weighted_travelled += weighted;
        self.visited[target] = true;

        Ok(())
    }

    /// Adds the edge from the last visited node back to the start node.
    fn close_tour(&mut self, graph: &PositionGraph) {
        let last = self.tour[self.tour.len() - 1];
        let edge = graph.edge(last, self.tour[0]);
        self.travelled += edge.distance;
        self.weighted_travelled += edge.weighted_distance();
    }

    /// Walks one complete closed tour from `start`.
    pub(crate) fn run_tour(&mut self, graph: &PositionGraph, start: usize) -> Result<(), ColonyError> {
        self.reset(graph.len(), start);
        for _ in 0..graph.len() - 1 {
            self.step_to_next(graph)?;
        }
        self.close_tour(graph);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pathfinder::Point;

    fn square() -> PositionGraph {
        PositionGraph::new(vec![
            Point::new("A", 0, 0),
            Point::new("B", 10, 0),
            Point::new("C", 10, 10),
            Point::new("D", 0, 10),
        ])
    }

    #[test]
    fn test_reset_places_ant_on_start() {
        let mut ant = Ant::default();
        ant.reset(4, 2);
        assert_eq!(ant.current_position(), 2);
        assert_eq!(ant.travelled, 0.0);
        assert_eq!(ant.weighted_travelled, 0.0);
    }

    #[test]
    fn test_greedy_walk_around_square() {
        let graph = square();
        let mut ant = Ant::default();
        ant.run_tour(&graph, 0).unwrap();
        // nearest unvisited from A is B (first of the two side-10 edges),
        // then C, then D, closing D -> A
        assert_eq!(ant.tour, vec![0, 1, 2, 3]);
        assert!((ant.travelled - 40.0).abs() < 1e-9);
        // no pheromone yet, so both totals agree
        assert!((ant.weighted_travelled - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_tie_break_keeps_earliest_neighbour() {
        // B and D are both 10 away from A; B comes first in input order.
        let graph = square();
        let mut ant = Ant::default();
        ant.reset(4, 0);
        ant.step_to_next(&graph).unwrap();
        assert_eq!(ant.current_position(), 1);
    }

    #[test]
    fn test_pheromone_discount_redirects_step() {
        let mut graph = square();
        // discount A -> D enough to beat the tie with A -> B
        graph.raise_pheromone(0, 3, 0.2, 0.6);
        let mut ant = Ant::default();
        ant.reset(4, 0);
        ant.step_to_next(&graph).unwrap();
        assert_eq!(ant.current_position(), 3);
    }

    #[test]
    fn test_weighted_total_tracks_discount() {
        let mut graph = square();
        graph.raise_pheromone(0, 1, 0.5, 0.6);
        let mut ant = Ant::default();
        ant.reset(4, 0);
        ant.step_to_next(&graph).unwrap();
        assert!((ant.travelled - 10.0).abs() < 1e-12);
        assert!((ant.weighted_travelled - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_overstepping_reports_no_candidate() {
        let graph = square();
        let mut ant = Ant::default();
        ant.reset(4, 0);
        for _ in 0..3 {
            ant.step_to_next(&graph).unwrap();
        }
        let err = ant.step_to_next(&graph).unwrap_err();
        assert!(matches!(err, ColonyError::NoUnvisitedNeighbour { step: 3, .. }));
    }

    #[test]
    fn test_tour_visits_every_node_once() {
        let graph = square();
        let mut ant = Ant::default();
        for start in 0..4 {
            ant.run_tour(&graph, start).unwrap();
            let mut seen = vec![false; 4];
            for &idx in &ant.tour {
                assert!(!seen[idx], "node {idx} visited twice");
                seen[idx] = true;
            }
            assert!(seen.iter().all(|&s| s));
        }
    }
}
