//! Ant colony tour optimization.
//!
//! Models a population of ants leaving pheromone trails to find a short
//! closed tour through all positions. Each round every ant walks a
//! complete tour against a pheromone snapshot frozen for the round,
//! greedily picking the unvisited neighbour with the smallest
//! pheromone-discounted distance. After all ants finish, the coordinator
//! reinforces the edges of the best tour found so far and decays the
//! rest, biasing the next round toward the current best route.
//!
//! # Key Types
//!
//! - [`ColonyConfig`]: Algorithm parameters (ant count, pheromone
//!   spread/decay, seed, dispatch mode)
//! - [`AntColony`]: The coordinator; implements
//!   [`PathFinder`](crate::pathfinder::PathFinder)
//!
//! # References
//!
//! - Dorigo & Gambardella (1997), *Ant Colony System*
//! - <https://en.wikipedia.org/wiki/Ant_colony_optimization_algorithms>

mod agent;
mod config;
mod graph;
mod runner;

pub use config::ColonyConfig;
pub use runner::AntColony;
