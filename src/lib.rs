//! # bearing-aco
//!
//! Bearing-only target motion analysis with continuous ant colony
//! optimization.
//!
//! A moving observer records bearings to a target whose track is modelled as
//! a truncated polynomial per axis. The colony searches the polynomial
//! coefficients that minimize the sum of squared bearing residuals.
//!
//! ## Core Concepts
//!
//! - **Objective**: squared bearing residuals over a fixed observation set
//! - **Pheromone field**: one weight per coefficient, skewing future draws
//! - **Reproducibility**: a seed fixes every draw, including parallel runs
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bearing_aco::prelude::*;
//!
//! let observations = CsvLoader::new().load("track.csv")?;
//! let solver = AcoSolver::new(AcoConfig::new().dimensions(6).iterations(500))?;
//! let result = solver.solve_seeded(&observations, 42)?;
//!
//! println!("{:?} -> {}", result.best_solution, result.best_fitness);
//! ```

pub mod colony;
pub mod diagnostics;
pub mod error;
pub mod fitness;
pub mod logging;
pub mod observation;
pub mod params;
pub mod rng;
pub mod sampler;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::colony::prelude::*;
    pub use crate::diagnostics::prelude::*;
    pub use crate::error::*;
    pub use crate::fitness::prelude::*;
    pub use crate::observation::prelude::*;
    pub use crate::params::prelude::*;
    pub use crate::rng::{substream, LcgStream, RandomStream, RngStream};
    pub use crate::sampler::prelude::*;
}
