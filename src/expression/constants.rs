// Fixed vocabulary and tolerances for the expression engine
use std::f64::consts::{E, PI};

/// Named constants, substituted by value at conversion time
pub const CONSTANTS: [(&str, f64); 2] = [("pi", PI), ("e", E)];

/// Divisors smaller than this in magnitude count as zero
pub const DIVISION_EPSILON: f64 = 1e-15;
