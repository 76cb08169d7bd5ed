//! Objective traits
//!
//! This module defines the scoring interface the colony minimizes.

/// A non-negative cost over parameter vectors (lower = better)
#[cfg(feature = "parallel")]
pub trait Objective: Send + Sync {
    /// Score one candidate
    fn evaluate(&self, theta: &[f64]) -> f64;
}

/// A non-negative cost over parameter vectors (non-parallel version)
#[cfg(not(feature = "parallel"))]
pub trait Objective {
    /// Score one candidate
    fn evaluate(&self, theta: &[f64]) -> f64;
}

impl<O: Objective + ?Sized> Objective for &O {
    fn evaluate(&self, theta: &[f64]) -> f64 {
        (**self).evaluate(theta)
    }
}

/// A simple function wrapper for objective evaluation
pub struct FnObjective<F>
where
    F: Fn(&[f64]) -> f64,
{
    f: F,
}

impl<F> FnObjective<F>
where
    F: Fn(&[f64]) -> f64,
{
    /// Create a new function-based objective
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

#[cfg(feature = "parallel")]
impl<F> Objective for FnObjective<F>
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    fn evaluate(&self, theta: &[f64]) -> f64 {
        (self.f)(theta)
    }
}

#[cfg(not(feature = "parallel"))]
impl<F> Objective for FnObjective<F>
where
    F: Fn(&[f64]) -> f64,
{
    fn evaluate(&self, theta: &[f64]) -> f64 {
        (self.f)(theta)
    }
}
