use std::f64::consts::PI;

use crate::expression::{EvalError, ParenImbalance, SyntaxError};
use crate::quadrature::constants::DEFAULT_SAMPLE_POINTS;
use crate::quadrature::reference::{REFERENCE_CASES, run_reference_cases};
use crate::quadrature::{Advisory, QuadratureEngine, Rule};

fn engine_for(expression: &str, lower: f64, upper: f64, subdivisions: i64) -> QuadratureEngine {
    let mut engine = QuadratureEngine::new();
    assert!(engine.set_expression(expression).is_ok());
    engine.set_bounds(lower, upper);
    engine.set_subdivisions(subdivisions);
    engine
}

fn assert_close(result: &Result<f64, EvalError>, expected: f64, tolerance: f64) {
    assert!(result.is_ok(), "Expected a value but got: {:?}", result);
    if let Ok(value) = result {
        assert!(
            (value - expected).abs() < tolerance,
            "Expected {} within {}, got {}",
            expected,
            tolerance,
            value
        );
    }
}

#[test]
fn test_square_on_unit_interval() {
    let engine = engine_for("x^2", 0.0, 1.0, 1000);
    let report = engine.compute_all();
    for (_, result) in report.iter() {
        assert_close(result, 1.0 / 3.0, 1e-3);
    }

    if let (Ok(trapezoidal), Ok(simpson)) = (&report.trapezoidal, &report.simpson) {
        let trapezoidal_error = (trapezoidal - 1.0 / 3.0).abs();
        let simpson_error = (simpson - 1.0 / 3.0).abs();
        assert!(
            simpson_error < trapezoidal_error,
            "Simpson {} should beat trapezoidal {}",
            simpson_error,
            trapezoidal_error
        );
    }
}

#[test]
fn test_sine_half_period() {
    let engine = engine_for("sin(x)", 0.0, PI, 1000);
    let report = engine.compute_all();
    for (_, result) in report.iter() {
        assert_close(result, 2.0, 1e-3);
    }
}

#[test]
fn test_multi_digit_linear() {
    let engine = engine_for("100 + 25*x", 0.0, 10.0, 100);
    let report = engine.compute_all();
    for (_, result) in report.iter() {
        assert_close(result, 2250.0, 1e-6);
    }
}

#[test]
fn test_swapped_bounds_match_reordered_call() {
    let mut swapped = engine_for("x^3 - x", 0.0, 1.0, 250);
    let advisory = swapped.set_bounds(2.0, -1.0);
    assert_eq!(
        advisory,
        Some(Advisory::BoundsSwapped {
            lower: 2.0,
            upper: -1.0
        })
    );

    let mut ordered = engine_for("x^3 - x", 0.0, 1.0, 250);
    assert_eq!(ordered.set_bounds(-1.0, 2.0), None);

    assert_eq!(swapped.config(), ordered.config());
    assert_eq!(swapped.compute_all(), ordered.compute_all());
}

#[test]
fn test_zero_subdivisions_behave_like_one() {
    let mut clamped = engine_for("exp(x)", 0.0, 1.0, 1000);
    assert_eq!(
        clamped.set_subdivisions(0),
        Some(Advisory::SubdivisionsClamped { requested: 0 })
    );

    let mut single = engine_for("exp(x)", 0.0, 1.0, 1000);
    assert_eq!(single.set_subdivisions(1), None);

    assert_eq!(clamped.config().subdivisions(), 1);
    assert_eq!(clamped.compute_all(), single.compute_all());
}

#[test]
fn test_odd_subdivisions_for_simpson_are_not_persisted() {
    let engine = engine_for("x^4", 0.0, 1.0, 3);
    let simpson = engine.integrate(Rule::Simpson);
    assert_eq!(engine.config().subdivisions(), 3);

    let direct = Rule::Simpson.integrate(|x| engine.evaluate_at(x), 0.0, 1.0, 4);
    assert_eq!(simpson, direct);

    let trapezoidal = engine.integrate(Rule::Trapezoidal);
    let direct = Rule::Trapezoidal.integrate(|x| engine.evaluate_at(x), 0.0, 1.0, 3);
    assert_eq!(trapezoidal, direct);
}

#[test]
fn test_rules_fail_independently() {
    let engine = engine_for("1/x", 0.0, 1.0, 1000);
    let report = engine.compute_all();
    assert_eq!(report.trapezoidal, Err(EvalError::DivisionByZero));
    assert_eq!(report.simpson, Err(EvalError::DivisionByZero));
    assert!(report.midpoint.is_ok());
}

#[test]
fn test_domain_error_reported_per_rule() {
    let engine = engine_for("ln(x)", 0.0, 1.0, 1000);
    let report = engine.compute_all();
    let expected = Err(EvalError::DomainError {
        function: "ln",
        argument: 0.0,
    });
    assert_eq!(report.trapezoidal, expected);
    assert_eq!(report.simpson, expected);
    assert_close(&report.midpoint, -1.0, 1e-2);
}

#[test]
fn test_rejected_expression_keeps_previous() {
    let mut engine = engine_for("x^2", 0.0, 1.0, 10);
    let before = engine.postfix().clone();

    assert_eq!(
        engine.set_expression("(x"),
        Err(SyntaxError::UnbalancedParentheses(
            ParenImbalance::MissingClosing
        ))
    );
    assert_eq!(engine.expression(), "x^2");
    assert_eq!(engine.postfix(), &before);
    assert_close(&engine.evaluate_at(3.0), 9.0, 1e-12);
}

#[test]
fn test_new_expression_replaces_stream() {
    let mut engine = engine_for("x^2", 0.0, 1.0, 10);
    assert!(engine.set_expression("2*x + 3").is_ok());
    assert_eq!(engine.postfix().to_string(), "2 x * 3 +");
    assert_close(&engine.evaluate_at(5.0), 13.0, 1e-12);
}

#[test]
fn test_engine_without_expression() {
    let engine = QuadratureEngine::new();
    let report = engine.compute_all();
    for (_, result) in report.iter() {
        assert_eq!(result, &Err(EvalError::EmptyResult));
    }
}

#[test]
fn test_with_expression() {
    assert!(QuadratureEngine::with_expression("sqrt(x)").is_ok());
    assert_eq!(
        QuadratureEngine::with_expression("1+2)").err(),
        Some(SyntaxError::UnbalancedParentheses(
            ParenImbalance::ExtraClosing
        ))
    );
}

#[test]
fn test_sample_default_points() {
    let engine = engine_for("1/x", 0.0, 1.0, 10);
    let samples = engine.sample(&DEFAULT_SAMPLE_POINTS);
    assert_eq!(samples.len(), DEFAULT_SAMPLE_POINTS.len());

    if let Some(at_zero) = samples.first() {
        assert_eq!(at_zero.value, Err(EvalError::DivisionByZero));
        assert_eq!(at_zero.to_string(), "f(0) = Error: Division by zero");
    }
    if let Some(at_two) = samples.iter().find(|s| s.x == 2.0) {
        assert_eq!(at_two.value, Ok(0.5));
        assert_eq!(at_two.to_string(), "f(2) = 0.5");
    }
}

#[test]
fn test_settings_display() {
    let engine = engine_for("x^2", -1.0, 2.5, 400);
    let rendered = engine.to_string();
    assert!(rendered.contains("Expression:   x^2"));
    assert!(rendered.contains("Postfix:      x 2 ^"));
    assert!(rendered.contains("Lower bound:  -1"));
    assert!(rendered.contains("Upper bound:  2.5"));
    assert!(rendered.contains("Subdivisions: 400"));
}

#[test]
fn test_report_display() {
    let engine = engine_for("1/x", 0.0, 1.0, 10);
    let rendered = engine.compute_all().to_string();
    assert!(rendered.contains("Trapezoidal Rule:  Error - Division by zero"));
    assert!(rendered.contains("Simpson's Rule:    Error - Division by zero"));
    assert!(rendered.contains("Midpoint Rule:"));
    assert_eq!(rendered.lines().count(), 3);
}

#[test]
fn test_reference_cases_pass() {
    let outcomes = run_reference_cases();
    assert_eq!(outcomes.len(), REFERENCE_CASES.len());
    for outcome in &outcomes {
        assert!(outcome.report.is_ok(), "{} failed to parse", outcome.case.label);
        let error = outcome.max_error();
        assert!(error.is_some());
        if let Some(error) = error {
            assert!(error < 1e-3, "{}: error {}", outcome.case.label, error);
        }
    }
}
