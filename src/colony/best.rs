//! Global best tracking

use serde::{Deserialize, Serialize};

use crate::params::vector::ParameterVector;

/// Lowest-fitness candidate seen so far
///
/// Fitness only ever decreases, and the solution is replaced together with
/// it. Ties keep the earlier candidate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BestResult {
    fitness: f64,
    solution: Option<ParameterVector>,
}

impl BestResult {
    /// Start with fitness `+inf` and no solution
    pub fn new() -> Self {
        Self {
            fitness: f64::INFINITY,
            solution: None,
        }
    }

    /// Replace the best if `fitness` is strictly lower
    ///
    /// Returns true if the candidate was taken.
    pub fn offer(&mut self, fitness: f64, candidate: &ParameterVector) -> bool {
        if fitness < self.fitness {
            self.fitness = fitness;
            self.solution = Some(candidate.clone());
            true
        } else {
            false
        }
    }

    /// Best fitness so far
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Best solution so far
    pub fn solution(&self) -> Option<&ParameterVector> {
        self.solution.as_ref()
    }

    /// Check if any candidate has been accepted
    pub fn is_found(&self) -> bool {
        self.solution.is_some()
    }

    /// Split into fitness and solution
    pub fn into_parts(self) -> (f64, Option<ParameterVector>) {
        (self.fitness, self.solution)
    }
}

impl Default for BestResult {
    fn default() -> Self {
        Self::new()
    }
}
