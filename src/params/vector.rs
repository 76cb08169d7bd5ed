//! Trajectory parameter vector
//!
//! A candidate solution: the polynomial coefficients of the target track.

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

/// Fixed-length vector of trajectory coefficients
///
/// Coefficient `2k + axis` is the k-th derivative of the target position on
/// `axis` (0 = x, 1 = y) at synthetic time zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterVector {
    coefficients: Vec<f64>,
}

impl ParameterVector {
    /// Create a new vector with the given coefficients
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    /// Create a zero-filled vector of the given dimension
    pub fn zeros(dimension: usize) -> Self {
        Self {
            coefficients: vec![0.0; dimension],
        }
    }

    /// Number of coefficients
    pub fn dimension(&self) -> usize {
        self.coefficients.len()
    }

    /// Get a reference to the coefficients
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Get a mutable reference to the coefficients
    pub fn coefficients_mut(&mut self) -> &mut [f64] {
        &mut self.coefficients
    }

    /// Get the underlying vector
    pub fn into_inner(self) -> Vec<f64> {
        self.coefficients
    }

    /// Coefficients for one axis, in increasing derivative order
    pub fn axis(&self, axis: usize) -> impl Iterator<Item = f64> + '_ {
        self.coefficients.iter().skip(axis).step_by(2).copied()
    }

    /// Initial target position (x, y)
    pub fn position(&self) -> (f64, f64) {
        (
            self.coefficients.first().copied().unwrap_or(0.0),
            self.coefficients.get(1).copied().unwrap_or(0.0),
        )
    }

    /// Target velocity (vx, vy)
    pub fn velocity(&self) -> (f64, f64) {
        (
            self.coefficients.get(2).copied().unwrap_or(0.0),
            self.coefficients.get(3).copied().unwrap_or(0.0),
        )
    }
}

impl Index<usize> for ParameterVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.coefficients[index]
    }
}

impl From<Vec<f64>> for ParameterVector {
    fn from(coefficients: Vec<f64>) -> Self {
        Self::new(coefficients)
    }
}

impl fmt::Display for ParameterVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for c in &self.coefficients {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{c}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_split() {
        let v = ParameterVector::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(v.axis(0).collect::<Vec<_>>(), vec![1.0, 3.0, 5.0]);
        assert_eq!(v.axis(1).collect::<Vec<_>>(), vec![2.0, 4.0, 6.0]);
        assert_eq!(v.position(), (1.0, 2.0));
        assert_eq!(v.velocity(), (3.0, 4.0));
    }

    #[test]
    fn test_display_space_separated() {
        let v = ParameterVector::new(vec![100.0, 0.5, -1.0, 2.0]);
        assert_eq!(v.to_string(), "100 0.5 -1 2");
    }

    #[test]
    fn test_zeros() {
        let v = ParameterVector::zeros(8);
        assert_eq!(v.dimension(), 8);
        assert!(v.coefficients().iter().all(|&c| c == 0.0));
    }
}
