//! Objective evaluation
//!
//! This module provides the objective abstraction and the bearing-residual
//! objective used for target motion analysis.

pub mod arctan;
pub mod bearing;
pub mod traits;

pub mod prelude {
    pub use super::arctan::{AtanMode, ArctanTable};
    pub use super::bearing::*;
    pub use super::traits::*;
}
