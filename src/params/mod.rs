//! Trajectory parameterization
//!
//! This module provides the candidate vector, its bounds, the polynomial
//! order and the named search ranges.

pub mod bounds;
pub mod order;
pub mod presets;
pub mod vector;

pub mod prelude {
    pub use super::bounds::*;
    pub use super::order::*;
    pub use super::presets::*;
    pub use super::vector::*;
}
