//! Candidate construction
//!
//! Each ant draws one coefficient per dimension from the random stream,
//! in dimension order, and maps it into that dimension's bounds.

pub mod biased;
pub mod uniform;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::colony::pheromone::PheromoneField;
use crate::params::bounds::MultiBounds;
use crate::params::vector::ParameterVector;
use crate::rng::RandomStream;

pub use biased::BiasedSampler;
pub use uniform::UniformSampler;

/// Draws one candidate parameter vector per call
pub trait CandidateSampler: Send + Sync {
    /// Sample a candidate within `bounds`
    fn sample<S: RandomStream>(
        &self,
        bounds: &MultiBounds,
        pheromones: &PheromoneField,
        stream: &mut S,
    ) -> ParameterVector;

    /// Unit draws consumed per dimension
    fn draws_per_dimension(&self) -> usize;
}

/// Which sampler a run uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplingPolicy {
    /// Independent uniform draws; pheromones are ignored
    Uniform,
    /// Draws skewed toward the upper bound by pheromone strength
    #[default]
    PheromoneBiased,
}

impl fmt::Display for SamplingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uniform => write!(f, "uniform"),
            Self::PheromoneBiased => write!(f, "biased"),
        }
    }
}

impl FromStr for SamplingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "uniform" => Ok(Self::Uniform),
            "biased" | "pheromone_biased" | "pheromone-biased" => Ok(Self::PheromoneBiased),
            other => Err(format!("unknown sampling policy '{other}'")),
        }
    }
}

pub mod prelude {
    pub use super::{BiasedSampler, CandidateSampler, SamplingPolicy, UniformSampler};
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::rng::RandomStream;

    /// Replays a fixed script of unit draws, counting how many were taken
    pub struct ScriptedStream {
        values: Vec<f64>,
        pub taken: usize,
    }

    impl ScriptedStream {
        pub fn new(values: Vec<f64>) -> Self {
            Self { values, taken: 0 }
        }
    }

    impl RandomStream for ScriptedStream {
        fn next_unit(&mut self) -> f64 {
            let value = self.values[self.taken % self.values.len()];
            self.taken += 1;
            value
        }
    }
}
