//! Polynomial order of the trajectory model

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Number of derivative terms per axis in the target trajectory
///
/// The parameter vector interleaves the axes: index `2k` holds the k-th
/// derivative of x, index `2k + 1` the k-th derivative of y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PolynomialOrder {
    /// Position and velocity (4 coefficients)
    ConstantVelocity,
    /// Adds acceleration (6 coefficients)
    ConstantAcceleration,
    /// Adds jerk (8 coefficients)
    ConstantJerk,
}

impl PolynomialOrder {
    /// Resolve the order from a parameter vector length
    pub fn from_dimensions(dimensions: usize) -> Result<Self, ConfigError> {
        match dimensions {
            4 => Ok(Self::ConstantVelocity),
            6 => Ok(Self::ConstantAcceleration),
            8 => Ok(Self::ConstantJerk),
            other => Err(ConfigError::UnsupportedDimensions(other)),
        }
    }

    /// Total number of coefficients (D)
    pub fn dimensions(self) -> usize {
        match self {
            Self::ConstantVelocity => 4,
            Self::ConstantAcceleration => 6,
            Self::ConstantJerk => 8,
        }
    }

    /// Coefficients per axis (D / 2)
    pub fn terms_per_axis(self) -> usize {
        self.dimensions() / 2
    }
}

impl Default for PolynomialOrder {
    fn default() -> Self {
        Self::ConstantAcceleration
    }
}

impl TryFrom<usize> for PolynomialOrder {
    type Error = ConfigError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::from_dimensions(value)
    }
}

impl From<PolynomialOrder> for usize {
    fn from(order: PolynomialOrder) -> Self {
        order.dimensions()
    }
}

impl fmt::Display for PolynomialOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dimensions())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dimensions() {
        assert_eq!(
            PolynomialOrder::from_dimensions(4),
            Ok(PolynomialOrder::ConstantVelocity)
        );
        assert_eq!(
            PolynomialOrder::from_dimensions(6),
            Ok(PolynomialOrder::ConstantAcceleration)
        );
        assert_eq!(
            PolynomialOrder::from_dimensions(8),
            Ok(PolynomialOrder::ConstantJerk)
        );
    }

    #[test]
    fn test_rejects_unsupported_dimensions() {
        for d in [0, 2, 3, 5, 7, 10] {
            assert_eq!(
                PolynomialOrder::from_dimensions(d),
                Err(ConfigError::UnsupportedDimensions(d))
            );
        }
    }

    #[test]
    fn test_terms_per_axis() {
        assert_eq!(PolynomialOrder::ConstantVelocity.terms_per_axis(), 2);
        assert_eq!(PolynomialOrder::ConstantAcceleration.terms_per_axis(), 3);
        assert_eq!(PolynomialOrder::ConstantJerk.terms_per_axis(), 4);
    }

    #[test]
    fn test_serde_as_integer() {
        let json = serde_json::to_string(&PolynomialOrder::ConstantJerk).unwrap();
        assert_eq!(json, "8");
        let order: PolynomialOrder = serde_json::from_str("4").unwrap();
        assert_eq!(order, PolynomialOrder::ConstantVelocity);
        assert!(serde_json::from_str::<PolynomialOrder>("5").is_err());
    }
}
