//! Four-quadrant arctangent evaluation
//!
//! Besides the libm `atan2`, bearings can be computed from a 1024-entry
//! first-octant table the way the streaming kernel does it, so software runs
//! can reproduce hardware fitness values.

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Number of table entries covering ratios in [0, 1]
pub const TABLE_SIZE: usize = 1024;

/// How predicted bearings are computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AtanMode {
    /// Library `atan2`
    #[default]
    Exact,
    /// Table lookup with quadrant correction
    LookupTable,
}

impl AtanMode {
    /// Four-quadrant arctangent of `y / x` in this mode
    #[inline]
    pub fn atan2(self, y: f64, x: f64) -> f64 {
        match self {
            Self::Exact => y.atan2(x),
            Self::LookupTable => ArctanTable::shared().atan2(y, x),
        }
    }
}

impl fmt::Display for AtanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::LookupTable => write!(f, "lut"),
        }
    }
}

impl FromStr for AtanMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exact" => Ok(Self::Exact),
            "lut" | "lookup" | "lookup_table" => Ok(Self::LookupTable),
            other => Err(format!("unknown atan mode '{other}'")),
        }
    }
}

/// Arctangent samples over ratios `i / (TABLE_SIZE - 1)`
#[derive(Clone, Debug)]
pub struct ArctanTable {
    entries: Vec<f64>,
}

impl ArctanTable {
    /// Build the table
    pub fn new() -> Self {
        let last = (TABLE_SIZE - 1) as f64;
        let entries = (0..TABLE_SIZE).map(|i| (i as f64 / last).atan()).collect();
        Self { entries }
    }

    /// Process-wide table, built on first use
    pub fn shared() -> &'static Self {
        static TABLE: OnceLock<ArctanTable> = OnceLock::new();
        TABLE.get_or_init(Self::new)
    }

    /// Arctangent of a ratio in [0, 1], truncated to the table grid
    pub fn lookup(&self, ratio: f64) -> f64 {
        // NaN and negative ratios saturate to index 0
        let index = ((ratio * (TABLE_SIZE - 1) as f64) as usize).min(TABLE_SIZE - 1);
        self.entries[index]
    }

    /// Four-quadrant arctangent
    ///
    /// The smaller magnitude is divided by the larger so the table only spans
    /// the first octant; the octant and quadrant are restored afterwards.
    pub fn atan2(&self, y: f64, x: f64) -> f64 {
        let abs_y = y.abs();
        let abs_x = x.abs();

        if abs_x > abs_y {
            let angle = self.lookup(abs_y / abs_x);
            match (x >= 0.0, y >= 0.0) {
                (true, true) => angle,
                (true, false) => -angle,
                (false, true) => PI - angle,
                (false, false) => -PI + angle,
            }
        } else {
            let angle = self.lookup(abs_x / abs_y);
            match (x >= 0.0, y >= 0.0) {
                (true, true) => FRAC_PI_2 - angle,
                (true, false) => -FRAC_PI_2 + angle,
                (false, true) => FRAC_PI_2 + angle,
                (false, false) => -FRAC_PI_2 - angle,
            }
        }
    }
}

impl Default for ArctanTable {
    fn default() -> Self {
        Self::new()
    }
}
