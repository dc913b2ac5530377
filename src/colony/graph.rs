//! Complete position graph with per-edge pheromone state.
//!
//! An arena of nodes indexed by input position: each node carries one
//! directed edge to every other point, in original input order skipping
//! itself. Edge lists and distances are fixed at construction; the
//! pheromone level is the only mutable field, and only the coordinator
//! writes it between rounds.

use crate::pathfinder::Point;

/// A directed edge from one node to another.
#[derive(Debug, Clone)]
pub(crate) struct Edge {
    /// Index of the node this edge leads to.
    pub(crate) target: usize,
    /// Euclidean distance, fixed at construction.
    pub(crate) distance: f64,
    /// Reinforcement level in `[0, max_pheromone_factor]`.
    pub(crate) pheromone_level: f64,
}

impl Edge {
    /// Distance discounted by the pheromone level: higher pheromone makes
    /// the edge look shorter to an ant.
    pub(crate) fn weighted_distance(&self) -> f64 {
        (1.0 - self.pheromone_level) * self.distance
    }
}

#[derive(Debug, Clone)]
struct Node {
    neighbours: Vec<Edge>,
}

/// Immutable complete graph over the input points.
#[derive(Debug, Clone)]
pub(crate) struct PositionGraph {
    points: Vec<Point>,
    nodes: Vec<Node>,
}

impl PositionGraph {
    pub(crate) fn new(points: Vec<Point>) -> Self {
        let nodes = (0..points.len())
            .map(|i| Node {
                neighbours: points
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .map(|(j, p)| Edge {
                        target: j,
                        distance: points[i].distance_to(p),
                        pheromone_level: 0.0,
                    })
                    .collect(),
            })
            .collect();

        Self { points, nodes }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn points(&self) -> &[Point] {
        &self.points
    }

    /// Outgoing edges of `from`, in input order skipping `from` itself.
    pub(crate) fn neighbours(&self, from: usize) -> &[Edge] {
        &self.nodes[from].neighbours
    }

    /// The edge `from -> to`.
    ///
    /// # Panics
    /// Panics if `to` is not a neighbour of `from`. On a complete graph
    /// that only happens with a bad index, which is a programmer error.
    pub(crate) fn edge(&self, from: usize, to: usize) -> &Edge {
        self.nodes[from]
            .neighbours
            .iter()
            .find(|e| e.target == to)
            .unwrap_or_else(|| panic!("no neighbour from {from} to {to}"))
    }

    fn edge_mut(&mut self, from: usize, to: usize) -> &mut Edge {
        self.nodes[from]
            .neighbours
            .iter_mut()
            .find(|e| e.target == to)
            .unwrap_or_else(|| panic!("no neighbour from {from} to {to}"))
    }

    /// Reduces the pheromone level of every edge leaving `from`, clamped
    /// at 0.
    pub(crate) fn decay_pheromones(&mut self, from: usize, amount: f64) {
        for edge in &mut self.nodes[from].neighbours {
            edge.pheromone_level = (edge.pheromone_level - amount).max(0.0);
        }
    }

    /// Raises the pheromone level of `from -> to`, clamped at `max`.
    pub(crate) fn raise_pheromone(&mut self, from: usize, to: usize, amount: f64, max: f64) {
        let edge = self.edge_mut(from, to);
        edge.pheromone_level = (edge.pheromone_level + amount).min(max);
    }

    /// Zeroes the pheromone level of every edge in the graph.
    pub(crate) fn clear_pheromones(&mut self) {
        for node in &mut self.nodes {
            for edge in &mut node.neighbours {
                edge.pheromone_level = 0.0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> PositionGraph {
        PositionGraph::new(vec![
            Point::new("A", 0, 0),
            Point::new("B", 10, 0),
            Point::new("C", 10, 10),
        ])
    }

    #[test]
    fn test_construction_distances() {
        let graph = triangle();
        assert_eq!(graph.len(), 3);
        assert!((graph.edge(0, 1).distance - 10.0).abs() < 1e-12);
        assert!((graph.edge(1, 2).distance - 10.0).abs() < 1e-12);
        assert!((graph.edge(0, 2).distance - 200f64.sqrt()).abs() < 1e-12);
        // directed pair: both records exist with the same distance
        assert!((graph.edge(2, 0).distance - graph.edge(0, 2).distance).abs() < 1e-12);
    }

    #[test]
    fn test_neighbours_keep_input_order() {
        let graph = triangle();
        let targets: Vec<usize> = graph.neighbours(1).iter().map(|e| e.target).collect();
        assert_eq!(targets, vec![0, 2]);
    }

    #[test]
    fn test_pheromone_starts_at_zero() {
        let graph = triangle();
        for i in 0..graph.len() {
            for edge in graph.neighbours(i) {
                assert_eq!(edge.pheromone_level, 0.0);
            }
        }
    }

    #[test]
    fn test_weighted_distance_discount() {
        let mut graph = triangle();
        graph.raise_pheromone(0, 1, 0.4, 0.6);
        let edge = graph.edge(0, 1);
        assert!((edge.weighted_distance() - 6.0).abs() < 1e-12);
        // the reverse edge evolves independently
        assert_eq!(graph.edge(1, 0).pheromone_level, 0.0);
    }

    #[test]
    fn test_raise_clamps_at_max() {
        let mut graph = triangle();
        for _ in 0..100 {
            graph.raise_pheromone(0, 1, 0.05, 0.6);
        }
        assert!((graph.edge(0, 1).pheromone_level - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_decay_clamps_at_zero() {
        let mut graph = triangle();
        graph.raise_pheromone(0, 1, 0.01, 0.6);
        graph.decay_pheromones(0, 1.0);
        for edge in graph.neighbours(0) {
            assert_eq!(edge.pheromone_level, 0.0);
        }
    }

    #[test]
    fn test_decay_touches_only_one_node() {
        let mut graph = triangle();
        graph.raise_pheromone(0, 1, 0.2, 0.6);
        graph.raise_pheromone(1, 0, 0.2, 0.6);
        graph.decay_pheromones(0, 0.05);
        assert!((graph.edge(0, 1).pheromone_level - 0.15).abs() < 1e-12);
        assert!((graph.edge(1, 0).pheromone_level - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_clear_pheromones() {
        let mut graph = triangle();
        graph.raise_pheromone(0, 1, 0.3, 0.6);
        graph.raise_pheromone(2, 1, 0.3, 0.6);
        graph.clear_pheromones();
        for i in 0..graph.len() {
            for edge in graph.neighbours(i) {
                assert_eq!(edge.pheromone_level, 0.0);
            }
        }
    }

    #[test]
    #[should_panic(expected = "no neighbour")]
    fn test_self_edge_lookup_panics() {
        let graph = triangle();
        graph.edge(1, 1);
    }
}
