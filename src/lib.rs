//! Integrix - numerical integration of single-variable expressions
//!
//! An expression in `x` is converted once to postfix form with the
//! shunting-yard algorithm, then evaluated at every sample point of the
//! trapezoidal, Simpson's and midpoint rules.

pub mod expression;
pub mod quadrature;

// Re-export the main public API
pub use expression::{EvalError, ParenImbalance, PostfixStream, SyntaxError, convert};
pub use quadrature::{
    Advisory, IntegrationConfig, IntegrationReport, QuadratureEngine, QuadratureError, Rule,
};

/// Integrate `expression` over `[lower, upper]` with every rule
///
/// Inverted bounds are swapped and a subdivision count below 1 is raised to
/// 1, exactly as [`QuadratureEngine`] does.
///
/// # Errors
///
/// Returns an error if the expression does not parse. Evaluation failures
/// are reported per rule inside the returned report.
///
/// # Examples
///
/// ```
/// use integrix::integrate;
///
/// let report = integrate("x^2", 0.0, 1.0, 1000).expect("valid expression");
/// if let Ok(area) = report.simpson {
///     assert!((area - 1.0 / 3.0).abs() < 1e-9);
/// }
/// ```
pub fn integrate(
    expression: &str,
    lower: f64,
    upper: f64,
    subdivisions: i64,
) -> Result<IntegrationReport, SyntaxError> {
    let mut engine = QuadratureEngine::with_expression(expression)?;
    engine.set_bounds(lower, upper);
    engine.set_subdivisions(subdivisions);
    Ok(engine.compute_all())
}

/// Parse `expression` and evaluate it at `x`
///
/// # Errors
///
/// Returns an error if the expression does not parse or cannot be
/// evaluated at `x`.
///
/// # Examples
///
/// ```
/// use integrix::{EvalError, QuadratureError, evaluate};
///
/// assert_eq!(evaluate("2*x + 3", 5.0), Ok(13.0));
/// assert_eq!(
///     evaluate("1/x", 0.0),
///     Err(QuadratureError::EvalError(EvalError::DivisionByZero))
/// );
/// ```
pub fn evaluate(expression: &str, x: f64) -> Result<f64, QuadratureError> {
    let stream = convert(expression)?;
    Ok(stream.evaluate(x)?)
}
