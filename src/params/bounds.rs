//! Bounds for trajectory coefficients
//!
//! This module provides the closed intervals that constrain each coefficient
//! of a parameter vector.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Bounds for a single coefficient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (inclusive)
    pub max: f64,
}

impl Bounds {
    /// Create new bounds
    ///
    /// # Panics
    /// Panics if min > max
    pub fn new(min: f64, max: f64) -> Self {
        assert!(
            min <= max,
            "Invalid bounds: min ({}) must be <= max ({})",
            min,
            max
        );
        Self { min, max }
    }

    /// Create symmetric bounds centered at 0
    pub fn symmetric(half_width: f64) -> Self {
        Self::new(-half_width, half_width)
    }

    /// Create a degenerate interval pinning a coefficient to one value
    pub fn fixed(value: f64) -> Self {
        Self::new(value, value)
    }

    /// Get the range (max - min)
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Check if the interval is finite and ordered
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    /// Check if a value is within bounds
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp a value to be within bounds
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Map a unit draw in [0, 1) linearly onto the interval
    ///
    /// The result is clamped so rounding in `min + u * range` can never land
    /// outside `[min, max]`.
    pub fn denormalize(&self, unit: f64) -> f64 {
        self.clamp(self.min + unit * self.range())
    }
}

impl From<(f64, f64)> for Bounds {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}

/// Per-coefficient bounds for a whole parameter vector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultiBounds {
    /// Bounds for each dimension
    pub bounds: Vec<Bounds>,
}

impl MultiBounds {
    /// Create new multi-dimensional bounds
    pub fn new(bounds: Vec<Bounds>) -> Self {
        Self { bounds }
    }

    /// Create uniform bounds for all dimensions
    pub fn uniform(bound: Bounds, dimension: usize) -> Self {
        Self {
            bounds: vec![bound; dimension],
        }
    }

    /// Create symmetric bounds for all dimensions
    pub fn symmetric(half_width: f64, dimension: usize) -> Self {
        Self::uniform(Bounds::symmetric(half_width), dimension)
    }

    /// Get number of dimensions
    pub fn dimension(&self) -> usize {
        self.bounds.len()
    }

    /// Get bounds for a specific dimension
    pub fn get(&self, index: usize) -> Option<&Bounds> {
        self.bounds.get(index)
    }

    /// Iterate over the per-dimension bounds
    pub fn iter(&self) -> std::slice::Iter<'_, Bounds> {
        self.bounds.iter()
    }

    /// Check if all values are within bounds
    pub fn contains_vec(&self, values: &[f64]) -> bool {
        values.len() == self.bounds.len()
            && values
                .iter()
                .zip(self.bounds.iter())
                .all(|(&v, b)| b.contains(v))
    }

    /// Check every interval and that there is one per coefficient
    pub fn validate(&self, expected_dimension: usize) -> Result<(), ConfigError> {
        if self.bounds.len() != expected_dimension {
            return Err(ConfigError::BoundsMismatch {
                expected: expected_dimension,
                actual: self.bounds.len(),
            });
        }
        for (index, b) in self.bounds.iter().enumerate() {
            if !b.is_valid() {
                return Err(ConfigError::InvalidBounds {
                    index,
                    min: b.min,
                    max: b.max,
                });
            }
        }
        Ok(())
    }
}

impl FromIterator<Bounds> for MultiBounds {
    fn from_iter<I: IntoIterator<Item = Bounds>>(iter: I) -> Self {
        Self {
            bounds: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<(f64, f64)> for MultiBounds {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        Self {
            bounds: iter.into_iter().map(Bounds::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_new() {
        let b = Bounds::new(-5.0, 5.0);
        assert_eq!(b.min, -5.0);
        assert_eq!(b.max, 5.0);
    }

    #[test]
    #[should_panic(expected = "Invalid bounds")]
    fn test_bounds_invalid() {
        Bounds::new(5.0, -5.0);
    }

    #[test]
    fn test_bounds_fixed() {
        let b = Bounds::fixed(0.0);
        assert_eq!(b.range(), 0.0);
        assert_eq!(b.denormalize(0.999), 0.0);
    }

    #[test]
    fn test_bounds_contains() {
        let b = Bounds::new(-5.0, 5.0);
        assert!(b.contains(0.0));
        assert!(b.contains(-5.0));
        assert!(b.contains(5.0));
        assert!(!b.contains(-5.1));
        assert!(!b.contains(5.1));
    }

    #[test]
    fn test_bounds_denormalize() {
        let b = Bounds::new(20000.0, 40000.0);
        assert_eq!(b.denormalize(0.0), 20000.0);
        assert_eq!(b.denormalize(0.5), 30000.0);
        assert!(b.denormalize(0.999_999_9) <= 40000.0);
    }

    #[test]
    fn test_bounds_is_valid() {
        assert!(Bounds::new(0.0, 1.0).is_valid());
        let reversed = Bounds { min: 1.0, max: 0.0 };
        assert!(!reversed.is_valid());
        let nan = Bounds {
            min: f64::NAN,
            max: 0.0,
        };
        assert!(!nan.is_valid());
    }

    #[test]
    fn test_multi_bounds_contains_vec() {
        let mb = MultiBounds::symmetric(5.0, 3);
        assert!(mb.contains_vec(&[0.0, 0.0, 0.0]));
        assert!(mb.contains_vec(&[-5.0, 5.0, 0.0]));
        assert!(!mb.contains_vec(&[-6.0, 0.0, 0.0]));
        assert!(!mb.contains_vec(&[0.0, 0.0]));
    }

    #[test]
    fn test_multi_bounds_validate() {
        let mb = MultiBounds::symmetric(1.0, 4);
        assert!(mb.validate(4).is_ok());
        assert_eq!(
            mb.validate(6),
            Err(ConfigError::BoundsMismatch {
                expected: 6,
                actual: 4
            })
        );

        let bad = MultiBounds::new(vec![
            Bounds::new(0.0, 1.0),
            Bounds {
                min: 2.0,
                max: 1.0,
            },
        ]);
        assert!(matches!(
            bad.validate(2),
            Err(ConfigError::InvalidBounds { index: 1, .. })
        ));
    }

    #[test]
    fn test_multi_bounds_from_tuples() {
        let mb: MultiBounds = vec![(0.0, 1.0), (-10.0, 10.0)].into_iter().collect();
        assert_eq!(mb.dimension(), 2);
        assert_eq!(mb.get(0), Some(&Bounds::new(0.0, 1.0)));
        assert_eq!(mb.get(1), Some(&Bounds::new(-10.0, 10.0)));
    }

    #[test]
    fn test_multi_bounds_serde_is_a_list_of_pairs() {
        let mb: MultiBounds = vec![(0.0, 1.0)].into_iter().collect();
        let json = serde_json::to_string(&mb).unwrap();
        assert_eq!(json, r#"[{"min":0.0,"max":1.0}]"#);
        let back: MultiBounds = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mb);
    }
}
