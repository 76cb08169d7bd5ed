//! Named coefficient ranges
//!
//! Each preset lists bounds for the jerk-order model; lower orders use a
//! prefix of the table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::bounds::{Bounds, MultiBounds};
use super::order::PolynomialOrder;

const SYNTHETIC: [(f64, f64); 8] = [
    (20000.0, 40000.0),
    (20000.0, 40000.0),
    (5.0, 10.0),
    (5.0, 10.0),
    (-0.01, 0.01),
    (-0.01, 0.01),
    (-0.0001, 0.0001),
    (-0.0001, 0.0001),
];

const REAL_WORLD: [(f64, f64); 8] = [
    (-500000.0, -200000.0),
    (2000000.0, 5000000.0),
    (0.0, 10.0),
    (0.0, 10.0),
    (0.0, 0.001),
    (-0.001, 0.0),
    (-0.00001, 0.00001),
    (-0.00001, 0.00001),
];

/// Coefficient search ranges for a known class of scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParameterSet {
    /// Simulated tracks a few tens of kilometres out
    #[default]
    Synthetic,
    /// Recorded tracks in projected map coordinates
    RealWorld,
}

impl ParameterSet {
    fn table(self) -> &'static [(f64, f64); 8] {
        match self {
            Self::Synthetic => &SYNTHETIC,
            Self::RealWorld => &REAL_WORLD,
        }
    }

    /// Bounds for the first `order.dimensions()` coefficients
    pub fn bounds(self, order: PolynomialOrder) -> MultiBounds {
        self.table()
            .iter()
            .take(order.dimensions())
            .map(|&(min, max)| Bounds::new(min, max))
            .collect()
    }

    /// Sampling step the recordings of this scenario were taken at
    pub fn default_sampling_time(self) -> f64 {
        match self {
            Self::Synthetic => 2.0,
            Self::RealWorld => 9.846666667,
        }
    }
}

impl fmt::Display for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Synthetic => write!(f, "synthetic"),
            Self::RealWorld => write!(f, "real-world"),
        }
    }
}

impl FromStr for ParameterSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "synthetic" => Ok(Self::Synthetic),
            "real-world" | "realworld" | "real_world" => Ok(Self::RealWorld),
            other => Err(format!("unknown parameter set '{other}'")),
        }
    }
}
