//! Ant colony search
//!
//! This module provides the run configuration, the pheromone field, global
//! best tracking and the solver loop that ties them together.

pub mod best;
pub mod config;
pub mod pheromone;
pub mod solver;

pub use best::BestResult;
pub use config::AcoConfig;
pub use pheromone::{PheromoneField, INITIAL_PHEROMONE};
pub use solver::AcoSolver;

pub mod prelude {
    pub use super::{AcoConfig, AcoSolver, BestResult, PheromoneField};
}
