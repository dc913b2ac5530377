//! Ant colony optimization for closed tours over fixed 2-D point sets.
//!
//! Approximates the shortest closed tour visiting every point exactly once
//! (a Traveling-Salesman-style problem) with a population of simulated ants
//! that greedily favor short, pheromone-reinforced edges. Each round the
//! colony dispatches all ants concurrently against a frozen pheromone
//! snapshot, ranks the finished tours, and reinforces the edges of the best
//! tour found so far.
//!
//! # Core Types
//!
//! - [`pathfinder::PathFinder`]: The strategy contract external callers
//!   consume — run a round, read the best tour and statistics, reset.
//! - [`pathfinder::Point`]: A named 2-D point; the immutable problem input.
//! - [`colony::AntColony`]: The ant-colony strategy implementing the
//!   contract.
//! - [`colony::ColonyConfig`]: Algorithm parameters (ant count, pheromone
//!   spread/decay, seed, dispatch mode).
//!
//! # Guarantees
//!
//! - Every reported tour is a permutation of all points exactly once.
//! - The best tour length is monotonically non-increasing between resets.
//! - Ants never observe a pheromone write made during their own round;
//!   with a fixed seed, runs are bit-identical.
//!
//! This is an improving approximation, not an exact solver: it converges
//! toward good tours and stays live across unbounded rounds, but proves
//! nothing about optimality.
//!
//! # References
//!
//! - Dorigo & Gambardella (1997), *Ant Colony System: A Cooperative
//!   Learning Approach to the Traveling Salesman Problem*

pub mod colony;
pub mod error;
pub mod pathfinder;

pub use error::ColonyError;
pub use pathfinder::{PathFinder, PathfinderStats, Point};
