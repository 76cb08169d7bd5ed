//! Error types for bearing-aco
//!
//! This module defines all error types used throughout the library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for invalid solver configuration
///
/// Every variant is detected before the first ant is sampled.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Parameter vector length outside the supported polynomial orders
    #[error("Unsupported dimension count {0}: must be 4, 6, or 8")]
    UnsupportedDimensions(usize),

    /// Bounds do not cover every coefficient
    #[error("Bounds dimension mismatch: expected {expected}, got {actual}")]
    BoundsMismatch { expected: usize, actual: usize },

    /// A coefficient interval is reversed or non-finite
    #[error("Invalid bounds for coefficient {index}: [{min}, {max}]")]
    InvalidBounds { index: usize, min: f64, max: f64 },

    /// No observations were supplied
    #[error("Observation set is empty")]
    EmptyObservations,

    /// More observations than the downstream buffer holds
    #[error("Observation set holds {count} entries, capacity is {capacity}")]
    TooManyObservations { count: usize, capacity: usize },

    /// An observation field is NaN or infinite
    #[error("Observation {index} has a non-finite field")]
    NonFiniteObservation { index: usize },

    /// Evaporation rate outside (0, 1)
    #[error("Evaporation rate must lie in (0, 1), got {0}")]
    InvalidEvaporationRate(f64),

    /// Exploration probability outside [0, 1]
    #[error("Exploration probability must lie in [0, 1], got {0}")]
    InvalidExploration(f64),

    /// Sampling step must be positive and finite
    #[error("Sampling time must be positive and finite, got {0}")]
    InvalidSamplingTime(f64),

    /// Colony without ants
    #[error("Population size must be positive")]
    EmptyPopulation,

    /// Run without iterations
    #[error("Iteration count must be positive")]
    ZeroIterations,
}

/// Error type for observation loading
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input file could not be opened or read
    #[error("Unable to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A field could not be parsed as a number
    #[error("Malformed record at line {line}: column '{column}' has value '{value}'")]
    MalformedRecord {
        line: u64,
        column: &'static str,
        value: String,
    },

    /// A row with the wrong number of fields
    #[error("Malformed record at line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },
}

impl LoadError {
    /// Returns true for errors caused by one bad row rather than the whole input
    pub fn is_record_error(&self) -> bool {
        matches!(self, Self::MalformedRecord { .. } | Self::FieldCount { .. })
    }
}

/// Top-level error type for colony runs
#[derive(Debug, Error)]
pub enum AcoError {
    /// Configuration error
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Observation loading error
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// Configuration file could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for AcoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias for colony operations
pub type AcoResult<T> = Result<T, AcoError>;
