// Configuration defaults for the quadrature engine
use std::f64::consts::{E, PI};

pub const DEFAULT_LOWER_BOUND: f64 = 0.0;
pub const DEFAULT_UPPER_BOUND: f64 = 1.0;
pub const DEFAULT_SUBDIVISIONS: usize = 1000;

/// Points used when spot-checking an expression
pub const DEFAULT_SAMPLE_POINTS: [f64; 7] = [0.0, 0.5, 1.0, 2.0, -1.0, PI, E];
