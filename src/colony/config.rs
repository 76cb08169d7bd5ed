//! Colony configuration

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AcoError, AcoResult, ConfigError};
use crate::fitness::arctan::AtanMode;
use crate::fitness::bearing::DEFAULT_SAMPLING_TIME;
use crate::params::bounds::MultiBounds;
use crate::params::order::PolynomialOrder;
use crate::params::presets::ParameterSet;
use crate::sampler::biased::DEFAULT_EPSILON;
use crate::sampler::SamplingPolicy;

/// Configuration for a colony run
///
/// Missing fields take their defaults when deserialized, so a JSON file only
/// needs to name what it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcoConfig {
    /// Number of trajectory coefficients (4, 6 or 8)
    pub dimensions: usize,
    /// Ants per iteration
    pub population_size: usize,
    /// Iterations to run
    pub iterations: usize,
    /// Pheromone evaporation rate, in (0, 1)
    pub evaporation_rate: f64,
    /// Probability of ignoring the pheromone bias, in [0, 1]
    pub epsilon: f64,
    /// Synthetic time step between observations
    pub sampling_time: f64,
    /// How ants draw candidates
    pub policy: SamplingPolicy,
    /// Named coefficient ranges
    pub parameter_set: ParameterSet,
    /// Explicit coefficient ranges, overriding `parameter_set`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<MultiBounds>,
    /// Bearing evaluation mode
    pub atan_mode: AtanMode,
    /// Sample and score ants of one iteration on the rayon pool
    pub parallel: bool,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            dimensions: PolynomialOrder::default().dimensions(),
            population_size: 20,
            iterations: 1000,
            evaporation_rate: 0.1,
            epsilon: DEFAULT_EPSILON,
            sampling_time: DEFAULT_SAMPLING_TIME,
            policy: SamplingPolicy::default(),
            parameter_set: ParameterSet::default(),
            bounds: None,
            atan_mode: AtanMode::default(),
            parallel: false,
        }
    }
}

impl AcoConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults for a named parameter set, including its sampling step
    pub fn for_parameter_set(parameter_set: ParameterSet) -> Self {
        Self {
            parameter_set,
            sampling_time: parameter_set.default_sampling_time(),
            ..Self::default()
        }
    }

    /// Set the number of coefficients
    pub fn dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Set the number of ants per iteration
    pub fn population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Set the number of iterations
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the evaporation rate
    pub fn evaporation_rate(mut self, rate: f64) -> Self {
        self.evaporation_rate = rate;
        self
    }

    /// Set the exploration probability
    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the sampling step
    pub fn sampling_time(mut self, sampling_time: f64) -> Self {
        self.sampling_time = sampling_time;
        self
    }

    /// Set the sampling policy
    pub fn policy(mut self, policy: SamplingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the named parameter set
    pub fn parameter_set(mut self, parameter_set: ParameterSet) -> Self {
        self.parameter_set = parameter_set;
        self
    }

    /// Set explicit coefficient bounds
    pub fn bounds(mut self, bounds: MultiBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Set the bearing evaluation mode
    pub fn atan_mode(mut self, atan_mode: AtanMode) -> Self {
        self.atan_mode = atan_mode;
        self
    }

    /// Enable or disable parallel ant evaluation
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Polynomial order implied by `dimensions`
    pub fn order(&self) -> Result<PolynomialOrder, ConfigError> {
        PolynomialOrder::from_dimensions(self.dimensions)
    }

    /// Bounds the ants sample within
    pub fn search_bounds(&self) -> Result<MultiBounds, ConfigError> {
        let order = self.order()?;
        Ok(self
            .bounds
            .clone()
            .unwrap_or_else(|| self.parameter_set.bounds(order)))
    }

    /// Check every setting
    ///
    /// # Errors
    /// Returns the first setting found out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.search_bounds()?.validate(self.dimensions)?;

        if !(self.evaporation_rate > 0.0 && self.evaporation_rate < 1.0) {
            return Err(ConfigError::InvalidEvaporationRate(self.evaporation_rate));
        }
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(ConfigError::InvalidExploration(self.epsilon));
        }
        if !(self.sampling_time.is_finite() && self.sampling_time > 0.0) {
            return Err(ConfigError::InvalidSamplingTime(self.sampling_time));
        }
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        Ok(())
    }

    /// Serialize to a JSON string
    pub fn to_json(&self) -> AcoResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from a JSON string
    pub fn from_json(json: &str) -> AcoResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> AcoResult<Self> {
        let file = File::open(path.as_ref())?;
        let config = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            AcoError::Serialization(format!(
                "Failed to parse {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Ok(config)
    }

    /// Save to a JSON file
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> AcoResult<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::bounds::Bounds;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid() {
        let config = AcoConfig::default();
        assert_eq!(config.dimensions, 6);
        assert_eq!(config.population_size, 20);
        assert_eq!(config.iterations, 1000);
        assert_eq!(config.evaporation_rate, 0.1);
        assert_eq!(config.epsilon, 0.2);
        assert_eq!(config.sampling_time, 2.0);
        assert_eq!(config.policy, SamplingPolicy::PheromoneBiased);
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_real_world_preset_sampling_time() {
        let config = AcoConfig::for_parameter_set(ParameterSet::RealWorld);
        assert!((config.sampling_time - 9.846666667).abs() < 1e-12);
        let bounds = config.search_bounds().unwrap();
        assert_eq!(bounds.get(0), Some(&Bounds::new(-500000.0, -200000.0)));
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        let config = AcoConfig::new().dimensions(5);
        assert_eq!(config.validate(), Err(ConfigError::UnsupportedDimensions(5)));
    }

    #[test]
    fn test_rejects_bounds_mismatch() {
        let config = AcoConfig::new()
            .dimensions(4)
            .bounds(MultiBounds::symmetric(1.0, 6));
        assert_eq!(
            config.validate(),
            Err(ConfigError::BoundsMismatch {
                expected: 4,
                actual: 6
            })
        );
    }

    #[test]
    fn test_rejects_out_of_range_rates() {
        for rho in [0.0, 1.0, -0.5, f64::NAN] {
            let err = AcoConfig::new().evaporation_rate(rho).validate().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidEvaporationRate(_)));
        }
        for eps in [-0.1, 1.1, f64::NAN] {
            let err = AcoConfig::new().epsilon(eps).validate().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidExploration(_)));
        }
        assert!(AcoConfig::new().epsilon(0.0).validate().is_ok());
        assert!(AcoConfig::new().epsilon(1.0).validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_sampling_time() {
        for dt in [0.0, -2.0, f64::INFINITY] {
            let err = AcoConfig::new().sampling_time(dt).validate().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidSamplingTime(_)));
        }
    }

    #[test]
    fn test_rejects_empty_population_and_zero_iterations() {
        assert_eq!(
            AcoConfig::new().population_size(0).validate(),
            Err(ConfigError::EmptyPopulation)
        );
        assert_eq!(
            AcoConfig::new().iterations(0).validate(),
            Err(ConfigError::ZeroIterations)
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = AcoConfig::from_json(r#"{"dimensions": 8, "policy": "uniform"}"#).unwrap();
        assert_eq!(config.dimensions, 8);
        assert_eq!(config.policy, SamplingPolicy::Uniform);
        assert_eq!(config.population_size, 20);
    }

    #[test]
    fn test_json_file_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("colony.json");
        let config = AcoConfig::new()
            .dimensions(4)
            .iterations(50)
            .atan_mode(AtanMode::LookupTable)
            .bounds(MultiBounds::symmetric(10.0, 4));
        config.save_json(&path).unwrap();

        let loaded = AcoConfig::from_json_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_bad_json_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = AcoConfig::from_json_file(&path).unwrap_err();
        assert!(matches!(err, AcoError::Serialization(_)));
    }
}
