use std::fmt;

use crate::quadrature::constants::{
    DEFAULT_LOWER_BOUND, DEFAULT_SUBDIVISIONS, DEFAULT_UPPER_BOUND,
};

/// Non-fatal notice that a setting was adjusted
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Advisory {
    /// Bounds arrived as `lower > upper` and were swapped
    BoundsSwapped { lower: f64, upper: f64 },
    /// Fewer than one subdivision was requested; one is used instead
    SubdivisionsClamped { requested: i64 },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Advisory::BoundsSwapped { lower, upper } => write!(
                f,
                "Bounds were swapped (lower {} > upper {}), integrating over [{}, {}]",
                lower, upper, upper, lower
            ),
            Advisory::SubdivisionsClamped { requested } => write!(
                f,
                "Subdivisions must be at least 1 (got {}), using 1",
                requested
            ),
        }
    }
}

/// Interval and subdivision count for one integration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrationConfig {
    lower: f64,
    upper: f64,
    subdivisions: usize,
}

impl IntegrationConfig {
    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn subdivisions(&self) -> usize {
        self.subdivisions
    }

    /// Store the bounds in ascending order
    pub fn set_bounds(&mut self, lower: f64, upper: f64) -> Option<Advisory> {
        if lower > upper {
            self.lower = upper;
            self.upper = lower;
            Some(Advisory::BoundsSwapped { lower, upper })
        } else {
            self.lower = lower;
            self.upper = upper;
            None
        }
    }

    /// Store the subdivision count, clamped to at least 1
    pub fn set_subdivisions(&mut self, requested: i64) -> Option<Advisory> {
        if requested < 1 {
            self.subdivisions = 1;
            Some(Advisory::SubdivisionsClamped { requested })
        } else {
            self.subdivisions = usize::try_from(requested).unwrap_or(usize::MAX);
            None
        }
    }
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            lower: DEFAULT_LOWER_BOUND,
            upper: DEFAULT_UPPER_BOUND,
            subdivisions: DEFAULT_SUBDIVISIONS,
        }
    }
}
