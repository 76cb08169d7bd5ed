//! Pheromone-biased sampling with epsilon exploration

use crate::colony::pheromone::PheromoneField;
use crate::params::bounds::MultiBounds;
use crate::params::vector::ParameterVector;
use crate::rng::RandomStream;

use super::CandidateSampler;

/// Default exploration probability
pub const DEFAULT_EPSILON: f64 = 0.2;

/// Power-law bias toward the upper bound, with uniform exploration
///
/// Per dimension: draw `r`, form `r^(1 / (1 + pheromone))`, then draw a
/// second value and fall back to plain `r` if it is at most `epsilon`.
#[derive(Clone, Copy, Debug)]
pub struct BiasedSampler {
    epsilon: f64,
}

impl BiasedSampler {
    /// Create a sampler with the given exploration probability
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// Exploration probability
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl Default for BiasedSampler {
    fn default() -> Self {
        Self::new(DEFAULT_EPSILON)
    }
}

impl CandidateSampler for BiasedSampler {
    fn sample<S: RandomStream>(
        &self,
        bounds: &MultiBounds,
        pheromones: &PheromoneField,
        stream: &mut S,
    ) -> ParameterVector {
        bounds
            .iter()
            .zip(pheromones.iter())
            .map(|(b, &tau)| {
                let r = stream.next_unit();
                let biased = r.powf(1.0 / (1.0 + tau));
                let unit = if stream.next_unit() <= self.epsilon {
                    r
                } else {
                    biased
                };
                b.denormalize(unit)
            })
            .collect::<Vec<_>>()
            .into()
    }

    fn draws_per_dimension(&self) -> usize {
        2
    }
}
