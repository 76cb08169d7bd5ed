//! Frame encoding and decoding
//!
//! An input frame is a run of [`InputWord`]s closed by TLAST. An output frame
//! holds `D + 1` [`OutputWord`]s: the best fitness, then the coefficients in
//! dimension order, with TLAST on the last one.

use bearing_aco::observation::{Observation, ObservationSet, DEFAULT_CAPACITY};
use bearing_aco::params::vector::ParameterVector;

use crate::error::{AxisError, AxisResult};
use crate::word::{InputWord, OutputWord};

/// Records the kernel buffers hold
pub const MAX_ENTRIES: usize = DEFAULT_CAPACITY;

/// Pack observations into an input frame
///
/// Values are narrowed to single precision and the elapsed time is dropped;
/// the kernel works on synthetic time.
pub fn encode_input_frame(observations: &ObservationSet) -> Vec<InputWord> {
    let last_index = observations.len().saturating_sub(1);
    observations
        .iter()
        .enumerate()
        .map(|(index, obs)| {
            InputWord::pack(
                obs.ownship_x as f32,
                obs.ownship_y as f32,
                obs.measured_bearing as f32,
                index == last_index,
            )
        })
        .collect()
}

/// Unpack an input frame
///
/// Reads until TLAST or `declared` records, whichever comes first. Elapsed
/// times are set to zero.
pub fn decode_input_frame(
    words: &[InputWord],
    declared: usize,
    capacity: usize,
) -> AxisResult<ObservationSet> {
    let mut observations = Vec::new();

    for word in words.iter().take(declared) {
        if observations.len() == capacity {
            return Err(AxisError::FrameOverCapacity { capacity });
        }
        let (x, y, bearing) = word.unpack();
        observations.push(Observation::new(
            0.0,
            f64::from(x),
            f64::from(y),
            f64::from(bearing),
        ));
        if word.last {
            return Ok(ObservationSet::from_vec(observations));
        }
    }

    if observations.len() == declared {
        Ok(ObservationSet::from_vec(observations))
    } else {
        Err(AxisError::MissingLast {
            received: observations.len(),
        })
    }
}

/// Best fitness and coefficients as carried on the wire
#[derive(Clone, Debug, PartialEq)]
pub struct KernelOutput {
    pub fitness: f32,
    pub solution: Vec<f32>,
}

impl KernelOutput {
    /// Narrow a solver result to single precision
    pub fn new(fitness: f64, solution: &ParameterVector) -> Self {
        Self {
            fitness: fitness as f32,
            solution: solution.coefficients().iter().map(|&v| v as f32).collect(),
        }
    }

    pub fn dimension(&self) -> usize {
        self.solution.len()
    }
}

/// Serialize a result into `D + 1` output words
pub fn encode_output_frame(output: &KernelOutput) -> Vec<OutputWord> {
    let last_index = output.solution.len();
    std::iter::once(output.fitness)
        .chain(output.solution.iter().copied())
        .enumerate()
        .map(|(index, value)| OutputWord::from_value(value, index == last_index))
        .collect()
}

/// Parse an output frame for a `dimensions`-coefficient solution
///
/// Words after TLAST are ignored.
pub fn decode_output_frame(words: &[OutputWord], dimensions: usize) -> AxisResult<KernelOutput> {
    let expected = dimensions + 1;
    let frame_len = words
        .iter()
        .position(|w| w.last)
        .map(|index| index + 1)
        .ok_or(AxisError::MissingLast {
            received: words.len(),
        })?;

    if frame_len != expected {
        return Err(AxisError::OutputLength {
            expected,
            found: frame_len,
        });
    }

    Ok(KernelOutput {
        fitness: words[0].value(),
        solution: words[1..frame_len].iter().map(OutputWord::value).collect(),
    })
}
