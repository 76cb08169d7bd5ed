//! Bearing observations
//!
//! This module provides the measurement record, the owned observation set
//! the solver reads, and CSV ingestion.

pub mod csv;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest frame the streaming kernel buffers
pub const DEFAULT_CAPACITY: usize = 1801;

/// One bearing measurement taken from the ownship
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Recorded time stamp; carried along but not used by the objective
    pub elapsed_time: f64,
    /// Ownship x position
    pub ownship_x: f64,
    /// Ownship y position
    pub ownship_y: f64,
    /// Measured bearing to the target in radians
    pub measured_bearing: f64,
}

impl Observation {
    /// Create a new observation
    pub fn new(elapsed_time: f64, ownship_x: f64, ownship_y: f64, measured_bearing: f64) -> Self {
        Self {
            elapsed_time,
            ownship_x,
            ownship_y,
            measured_bearing,
        }
    }

    /// Check that every field is finite
    pub fn is_finite(&self) -> bool {
        self.elapsed_time.is_finite()
            && self.ownship_x.is_finite()
            && self.ownship_y.is_finite()
            && self.measured_bearing.is_finite()
    }
}

/// Arrival-ordered collection of observations
///
/// An optional capacity mirrors the fixed-size buffers of the streaming
/// kernel; pushes beyond it are refused.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservationSet {
    observations: Vec<Observation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    capacity: Option<usize>,
}

impl ObservationSet {
    /// Create an empty, unbounded set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty set that holds at most `capacity` observations
    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self {
            observations: Vec::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    /// Wrap an existing vector without a capacity limit
    pub fn from_vec(observations: Vec<Observation>) -> Self {
        Self {
            observations,
            capacity: None,
        }
    }

    /// Append an observation
    pub fn push(&mut self, observation: Observation) -> Result<(), ConfigError> {
        if let Some(capacity) = self.capacity {
            if self.observations.len() >= capacity {
                return Err(ConfigError::TooManyObservations {
                    count: self.observations.len() + 1,
                    capacity,
                });
            }
        }
        self.observations.push(observation);
        Ok(())
    }

    /// Capacity limit, if any
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Iterate in arrival order
    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.observations.iter()
    }

    /// Borrow the observations as a slice
    pub fn as_slice(&self) -> &[Observation] {
        &self.observations
    }

    /// Keep only the first `len` observations
    pub fn truncate(&mut self, len: usize) {
        self.observations.truncate(len);
    }

    /// Check the set is usable as solver input
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.observations.is_empty() {
            return Err(ConfigError::EmptyObservations);
        }
        if let Some(capacity) = self.capacity {
            if self.observations.len() > capacity {
                return Err(ConfigError::TooManyObservations {
                    count: self.observations.len(),
                    capacity,
                });
            }
        }
        if let Some(index) = self.observations.iter().position(|o| !o.is_finite()) {
            return Err(ConfigError::NonFiniteObservation { index });
        }
        Ok(())
    }
}

impl FromIterator<Observation> for ObservationSet {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ObservationSet {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}

pub mod prelude {
    pub use super::csv::{CsvLoader, RecordPolicy};
    pub use super::{Observation, ObservationSet, DEFAULT_CAPACITY};
}
