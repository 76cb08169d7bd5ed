//! Stream kernel emulation
//!
//! Mirrors the hardware block: read an input frame, run the colony, write
//! the result as an output frame.

use bearing_aco::colony::{AcoConfig, AcoSolver};
use tracing::{debug, info};

use crate::error::{AxisError, AxisResult};
use crate::frame::{decode_input_frame, encode_output_frame, KernelOutput, MAX_ENTRIES};
use crate::word::{InputWord, OutputWord};

/// Software model of the stream kernel
#[derive(Clone, Debug)]
pub struct StreamKernel {
    solver: AcoSolver,
    seed: u64,
    capacity: usize,
}

impl StreamKernel {
    /// Create a kernel with a fixed seed and the default buffer capacity
    pub fn new(config: AcoConfig, seed: u64) -> AxisResult<Self> {
        Ok(Self {
            solver: AcoSolver::new(config)?,
            seed,
            capacity: MAX_ENTRIES,
        })
    }

    /// Override the record capacity
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Coefficients per output frame
    pub fn dimensions(&self) -> usize {
        self.solver.config().dimensions
    }

    /// Process one frame of at most `declared` records
    pub fn run(&self, input: &[InputWord], declared: usize) -> AxisResult<Vec<OutputWord>> {
        let observations = decode_input_frame(input, declared, self.capacity)?;
        debug!(records = observations.len(), "Input frame decoded");

        let result = self.solver.solve_seeded(&observations, self.seed)?;
        let solution = result.best_solution.as_ref().ok_or(AxisError::NoSolution)?;
        let output = KernelOutput::new(result.best_fitness, solution);

        info!(
            records = observations.len(),
            fitness = output.fitness,
            "Kernel run complete"
        );
        Ok(encode_output_frame(&output))
    }
}
