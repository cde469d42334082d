//! Built-in integrals with known closed forms, used as a self-check

use std::f64::consts::{E, PI};

use log::info;

use crate::expression::SyntaxError;
use crate::quadrature::core::QuadratureEngine;
use crate::quadrature::report::IntegrationReport;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceCase {
    pub label: &'static str,
    pub expression: &'static str,
    pub lower: f64,
    pub upper: f64,
    pub subdivisions: i64,
    pub exact: f64,
}

pub const REFERENCE_CASES: [ReferenceCase; 4] = [
    ReferenceCase {
        label: "Simple polynomial",
        expression: "x^2",
        lower: 0.0,
        upper: 1.0,
        subdivisions: 1000,
        exact: 1.0 / 3.0,
    },
    ReferenceCase {
        label: "Sine half-period",
        expression: "sin(x)",
        lower: 0.0,
        upper: PI,
        subdivisions: 1000,
        exact: 2.0,
    },
    ReferenceCase {
        label: "Exponential",
        expression: "exp(x)",
        lower: 0.0,
        upper: 1.0,
        subdivisions: 1000,
        exact: E - 1.0,
    },
    ReferenceCase {
        label: "Multi-digit linear",
        expression: "100 + 25*x",
        lower: 0.0,
        upper: 10.0,
        subdivisions: 100,
        exact: 2250.0,
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceOutcome {
    pub case: ReferenceCase,
    pub report: Result<IntegrationReport, SyntaxError>,
}

impl ReferenceOutcome {
    /// Largest absolute deviation from the exact value among the rules that
    /// succeeded, or `None` if none did
    pub fn max_error(&self) -> Option<f64> {
        let report = self.report.as_ref().ok()?;
        report
            .iter()
            .filter_map(|(_, result)| result.as_ref().ok())
            .map(|value| (value - self.case.exact).abs())
            .reduce(f64::max)
    }
}

/// Integrate every reference case with a fresh engine
pub fn run_reference_cases() -> Vec<ReferenceOutcome> {
    REFERENCE_CASES
        .iter()
        .map(|case| {
            info!("Running reference case: {}", case.label);
            let report = QuadratureEngine::with_expression(case.expression).map(|mut engine| {
                engine.set_bounds(case.lower, case.upper);
                engine.set_subdivisions(case.subdivisions);
                engine.compute_all()
            });
            ReferenceOutcome {
                case: *case,
                report,
            }
        })
        .collect()
}
