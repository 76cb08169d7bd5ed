//! # bearing-aco-axis
//!
//! AXI4-Stream framing for the bearing-aco kernel.
//!
//! Input frames carry one 96-bit word per observation holding the ownship
//! position and the measured bearing as IEEE-754 single-precision floats.
//! Output frames carry the best fitness followed by the best coefficients,
//! one 32-bit float per word. [`kernel::StreamKernel`] emulates the hardware
//! block on top of [`bearing_aco::colony::AcoSolver`].

pub mod dma;
pub mod error;
pub mod frame;
pub mod kernel;
pub mod word;

pub use error::{AxisError, AxisResult};

pub mod prelude {
    pub use crate::dma::*;
    pub use crate::error::{AxisError, AxisResult};
    pub use crate::frame::*;
    pub use crate::kernel::StreamKernel;
    pub use crate::word::*;
}
