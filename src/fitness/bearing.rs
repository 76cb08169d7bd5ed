//! Sum-of-squared bearing residuals
//!
//! The target track is a truncated Taylor polynomial per axis. Observation
//! `i` is taken at synthetic time `t_i = (i + 1) * sampling_time`; its
//! recorded time stamp is ignored.

use crate::fitness::arctan::AtanMode;
use crate::fitness::traits::Objective;
use crate::observation::{Observation, ObservationSet};

/// Default sampling step between consecutive observations
pub const DEFAULT_SAMPLING_TIME: f64 = 2.0;

/// Bearing-only trajectory objective over a fixed observation set
///
/// Residuals are `measured - predicted` without wrapping to (-pi, pi], so a
/// prediction on the far side of the branch cut is penalized by up to
/// `(2 pi)^2`.
#[derive(Clone, Debug)]
pub struct BearingObjective<'a> {
    observations: &'a [Observation],
    sampling_time: f64,
    atan: AtanMode,
}

impl<'a> BearingObjective<'a> {
    /// Create an objective with the default sampling step and exact atan2
    pub fn new(observations: &'a ObservationSet) -> Self {
        Self::from_slice(observations.as_slice())
    }

    /// Create an objective over a raw slice of observations
    pub fn from_slice(observations: &'a [Observation]) -> Self {
        Self {
            observations,
            sampling_time: DEFAULT_SAMPLING_TIME,
            atan: AtanMode::Exact,
        }
    }

    /// Set the sampling step
    pub fn with_sampling_time(mut self, sampling_time: f64) -> Self {
        self.sampling_time = sampling_time;
        self
    }

    /// Set the bearing evaluation mode
    pub fn with_atan_mode(mut self, atan: AtanMode) -> Self {
        self.atan = atan;
        self
    }

    /// Number of observations scored
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Check if there is nothing to score
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Predicted target position at synthetic time `t`
    pub fn position_at(theta: &[f64], t: f64) -> (f64, f64) {
        let mut x = 0.0;
        let mut y = 0.0;
        let mut power = 1.0;
        let mut factorial = 1.0;

        for (k, pair) in theta.chunks_exact(2).enumerate() {
            let gamma = power / factorial;
            x += pair[0] * gamma;
            y += pair[1] * gamma;
            power *= t;
            factorial *= (k + 1) as f64;
        }

        (x, y)
    }

    /// Per-observation residuals `measured - predicted`
    pub fn residuals(&self, theta: &[f64]) -> Vec<f64> {
        let mut t = 0.0;
        self.observations
            .iter()
            .map(|obs| {
                t += self.sampling_time;
                obs.measured_bearing - self.predicted_bearing(theta, obs, t)
            })
            .collect()
    }

    #[inline]
    fn predicted_bearing(&self, theta: &[f64], obs: &Observation, t: f64) -> f64 {
        let (x, y) = Self::position_at(theta, t);
        self.atan.atan2(y - obs.ownship_y, x - obs.ownship_x)
    }
}

impl Objective for BearingObjective<'_> {
    fn evaluate(&self, theta: &[f64]) -> f64 {
        let mut t = 0.0;
        let mut sum = 0.0;
        for obs in self.observations {
            t += self.sampling_time;
            let diff = obs.measured_bearing - self.predicted_bearing(theta, obs, t);
            sum += diff * diff;
        }
        sum
    }
}
