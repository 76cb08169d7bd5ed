//! Uniform sampling

use crate::colony::pheromone::PheromoneField;
use crate::params::bounds::MultiBounds;
use crate::params::vector::ParameterVector;
use crate::rng::RandomStream;

use super::CandidateSampler;

/// One uniform draw per dimension, mapped linearly into the bounds
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformSampler;

impl CandidateSampler for UniformSampler {
    fn sample<S: RandomStream>(
        &self,
        bounds: &MultiBounds,
        _pheromones: &PheromoneField,
        stream: &mut S,
    ) -> ParameterVector {
        bounds
            .iter()
            .map(|b| b.denormalize(stream.next_unit()))
            .collect::<Vec<_>>()
            .into()
    }

    fn draws_per_dimension(&self) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::bounds::Bounds;
    use crate::sampler::testing::ScriptedStream;

    #[test]
    fn test_linear_mapping() {
        let bounds = MultiBounds::new(vec![Bounds::new(0.0, 10.0), Bounds::new(-4.0, 4.0)]);
        let pheromones = PheromoneField::new(2);
        let mut stream = ScriptedStream::new(vec![0.25, 0.5]);

        let v = UniformSampler.sample(&bounds, &pheromones, &mut stream);
        assert_eq!(v.coefficients(), &[2.5, 0.0]);
        assert_eq!(stream.taken, 2);
    }

    #[test]
    fn test_ignores_pheromones() {
        let bounds = MultiBounds::symmetric(1.0, 3);
        let mut strong = PheromoneField::new(3);
        strong.update(0.1, &[0.0; 50]);

        let a = UniformSampler.sample(
            &bounds,
            &PheromoneField::new(3),
            &mut ScriptedStream::new(vec![0.9, 0.1, 0.4]),
        );
        let b = UniformSampler.sample(
            &bounds,
            &strong,
            &mut ScriptedStream::new(vec![0.9, 0.1, 0.4]),
        );
        assert_eq!(a, b);
    }
}
