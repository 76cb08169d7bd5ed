//! Diagnostics and statistics
//!
//! This module provides per-iteration statistics and the result of a colony
//! run.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::params::vector::ParameterVector;

/// Statistics for a single iteration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IterationStats {
    /// Iteration number (0-based)
    pub iteration: usize,
    /// Total objective evaluations so far
    pub evaluations: usize,
    /// Best fitness found up to and including this iteration
    pub best_fitness: f64,
    /// Lowest fitness among this iteration's ants
    pub iteration_best: f64,
    /// Mean fitness of this iteration's ants
    pub iteration_mean: f64,
    /// Mean pheromone level after the update
    pub pheromone_mean: f64,
    /// Wall time spent on the iteration (ms)
    pub elapsed_ms: f64,
}

impl IterationStats {
    /// Summarize one iteration's fitness values
    pub fn from_fitnesses(
        iteration: usize,
        evaluations: usize,
        best_fitness: f64,
        fitnesses: &[f64],
        pheromone_mean: f64,
    ) -> Self {
        let iteration_best = fitnesses.iter().copied().fold(f64::INFINITY, f64::min);
        let iteration_mean = if fitnesses.is_empty() {
            0.0
        } else {
            fitnesses.iter().sum::<f64>() / fitnesses.len() as f64
        };

        Self {
            iteration,
            evaluations,
            best_fitness,
            iteration_best,
            iteration_mean,
            pheromone_mean,
            elapsed_ms: 0.0,
        }
    }

    /// Set the iteration's wall time
    pub fn with_elapsed(mut self, duration: Duration) -> Self {
        self.elapsed_ms = duration.as_secs_f64() * 1000.0;
        self
    }
}

/// Statistics collector for an entire run
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    /// Statistics per iteration
    pub iterations: Vec<IterationStats>,
    /// Total runtime in milliseconds
    pub total_runtime_ms: f64,
}

impl RunStats {
    /// Create a new stats collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an iteration's statistics
    pub fn record(&mut self, stats: IterationStats) {
        self.iterations.push(stats);
    }

    /// Get the number of iterations recorded
    pub fn num_iterations(&self) -> usize {
        self.iterations.len()
    }

    /// Get the final best fitness
    pub fn final_best_fitness(&self) -> Option<f64> {
        self.iterations.last().map(|i| i.best_fitness)
    }

    /// Get the history of best-so-far fitness values
    pub fn best_fitness_history(&self) -> Vec<f64> {
        self.iterations.iter().map(|i| i.best_fitness).collect()
    }

    /// Get the history of per-iteration mean fitness values
    pub fn mean_fitness_history(&self) -> Vec<f64> {
        self.iterations.iter().map(|i| i.iteration_mean).collect()
    }

    /// Get the history of mean pheromone levels
    pub fn pheromone_history(&self) -> Vec<f64> {
        self.iterations.iter().map(|i| i.pheromone_mean).collect()
    }

    /// Set the total runtime
    pub fn set_runtime(&mut self, duration: Duration) {
        self.total_runtime_ms = duration.as_secs_f64() * 1000.0;
    }

    /// Get a summary of the run
    pub fn summary(&self) -> String {
        let final_best = self.final_best_fitness().unwrap_or(f64::INFINITY);
        let evaluations = self.iterations.last().map_or(0, |i| i.evaluations);

        format!(
            "Colony Summary:\n\
             - Iterations: {}\n\
             - Evaluations: {}\n\
             - Best fitness: {:.6}\n\
             - Runtime: {:.2}ms",
            self.num_iterations(),
            evaluations,
            final_best,
            self.total_runtime_ms
        )
    }
}

/// Result of a colony run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColonyResult {
    /// The best parameter vector found; `None` only if no ant scored below `+inf`
    pub best_solution: Option<ParameterVector>,
    /// The best fitness value
    pub best_fitness: f64,
    /// Number of iterations completed
    pub iterations: usize,
    /// Total objective evaluations
    pub evaluations: usize,
    /// Statistics for the run
    #[serde(skip_serializing_if = "RunStats::is_empty", default)]
    pub stats: RunStats,
}

impl RunStats {
    fn is_empty(&self) -> bool {
        self.iterations.is_empty()
    }
}

impl ColonyResult {
    /// Create a new colony result
    pub fn new(
        best_solution: Option<ParameterVector>,
        best_fitness: f64,
        iterations: usize,
        evaluations: usize,
    ) -> Self {
        Self {
            best_solution,
            best_fitness,
            iterations,
            evaluations,
            stats: RunStats::new(),
        }
    }

    /// Add statistics to the result
    pub fn with_stats(mut self, stats: RunStats) -> Self {
        self.stats = stats;
        self
    }

    /// Wall time of the run
    pub fn elapsed(&self) -> Duration {
        Duration::from_secs_f64(self.stats.total_runtime_ms.max(0.0) / 1000.0)
    }
}

pub mod prelude {
    pub use super::{ColonyResult, IterationStats, RunStats};
}
