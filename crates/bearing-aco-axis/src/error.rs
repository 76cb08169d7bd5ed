//! Error types for the stream adapter

use bearing_aco::error::AcoError;
use thiserror::Error;

/// Errors raised while framing, transporting or running a stream
#[derive(Debug, Error)]
pub enum AxisError {
    /// Input ran out before TLAST or the declared record count
    #[error("Input frame ended after {received} records without TLAST")]
    MissingLast { received: usize },

    /// More records than the kernel buffers hold
    #[error("Input frame exceeds the capacity of {capacity} records")]
    FrameOverCapacity { capacity: usize },

    /// DMA buffer length is not a whole number of records
    #[error("Buffer of {len} bytes is not a multiple of the {record}-byte record size")]
    TruncatedBuffer { len: usize, record: usize },

    /// Output frame does not hold exactly one fitness word plus D coefficients
    #[error("Output frame has {found} words, expected {expected}")]
    OutputLength { expected: usize, found: usize },

    /// The colony never scored a finite candidate
    #[error("Kernel produced no solution")]
    NoSolution,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Solver error: {0}")]
    Solver(#[from] AcoError),
}

/// Result type alias for adapter operations
pub type AxisResult<T> = Result<T, AxisError>;

#[cfg(test)]
mod tests {
    use super::*;
    use bearing_aco::error::ConfigError;

    #[test]
    fn test_display() {
        let err = AxisError::OutputLength {
            expected: 5,
            found: 3,
        };
        assert_eq!(err.to_string(), "Output frame has 3 words, expected 5");

        let err = AxisError::TruncatedBuffer { len: 13, record: 12 };
        assert!(err.to_string().contains("13 bytes"));
    }

    #[test]
    fn test_from_solver_error() {
        let err: AxisError = AcoError::from(ConfigError::EmptyObservations).into();
        assert!(matches!(err, AxisError::Solver(_)));
    }
}
