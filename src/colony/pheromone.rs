//! Pheromone field
//!
//! One positive weight per coefficient. Stronger weights skew the biased
//! sampler toward the upper end of that coefficient's range.

use serde::{Deserialize, Serialize};

/// Pheromone level every dimension starts a run with
pub const INITIAL_PHEROMONE: f64 = 1.0;

/// Per-dimension pheromone weights
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PheromoneField {
    values: Vec<f64>,
}

impl PheromoneField {
    /// Create a field with every dimension at [`INITIAL_PHEROMONE`]
    pub fn new(dimension: usize) -> Self {
        Self {
            values: vec![INITIAL_PHEROMONE; dimension],
        }
    }

    /// Number of dimensions
    pub fn dimension(&self) -> usize {
        self.values.len()
    }

    /// Weight of one dimension
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Iterate over the weights in dimension order
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }

    /// Borrow the weights as a slice
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Mean weight across dimensions
    pub fn mean(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    /// Evaporate then deposit one iteration's contributions
    ///
    /// Every dimension becomes `tau * (1 - rho) + sum(1 / (1 + f))` over the
    /// iteration's fitness values, accumulated in ant order. Each
    /// contribution lies in (0, 1] for non-negative fitness; NaN fitness
    /// deposits nothing.
    pub fn update(&mut self, evaporation_rate: f64, fitnesses: &[f64]) {
        let retain = 1.0 - evaporation_rate;
        for tau in &mut self.values {
            let mut next = *tau * retain;
            for &fitness in fitnesses {
                next += deposit(fitness);
            }
            *tau = next;
        }
    }
}

#[inline]
fn deposit(fitness: f64) -> f64 {
    if fitness.is_nan() {
        0.0
    } else {
        1.0 / (1.0 + fitness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_initial_state() {
        let field = PheromoneField::new(6);
        assert_eq!(field.dimension(), 6);
        assert!(field.iter().all(|&t| t == 1.0));
        assert_eq!(field.mean(), 1.0);
    }

    #[test]
    fn test_update_formula() {
        let mut field = PheromoneField::new(2);
        field.update(0.1, &[0.0, 1.0, 3.0]);
        // 0.9 + 1 + 0.5 + 0.25
        for &tau in field.iter() {
            assert_relative_eq!(tau, 2.65, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_update_is_uniform_across_dimensions() {
        let mut field = PheromoneField::new(8);
        for _ in 0..50 {
            field.update(0.3, &[12.0, 7.5, 0.2]);
        }
        let first = field.get(0).unwrap();
        assert!(field.iter().all(|&t| t == first));
    }

    #[test]
    fn test_stays_positive_with_huge_fitness() {
        let mut field = PheromoneField::new(3);
        for _ in 0..10_000 {
            field.update(0.99, &[f64::MAX, f64::INFINITY, f64::NAN]);
        }
        assert!(field.iter().all(|&t| t > 0.0));
    }

    #[test]
    fn test_converges_to_fixed_point() {
        // tau* = deposit / rho
        let mut field = PheromoneField::new(1);
        for _ in 0..2000 {
            field.update(0.1, &[1.0, 1.0]);
        }
        assert_relative_eq!(field.get(0).unwrap(), 10.0, epsilon = 1e-9);
    }
}
