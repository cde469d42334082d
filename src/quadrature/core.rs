use std::fmt;

use log::{debug, info, trace, warn};

use crate::expression::{EvalError, PostfixStream, SyntaxError, convert};
use crate::quadrature::config::{Advisory, IntegrationConfig};
use crate::quadrature::report::{IntegrationReport, Sample};
use crate::quadrature::rules::Rule;

/// Integrates one parsed expression over a configurable interval
#[derive(Debug, Clone, Default)]
pub struct QuadratureEngine {
    source: String,
    postfix: PostfixStream,
    config: IntegrationConfig,
}

impl QuadratureEngine {
    /// Create an engine with no expression and the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Returns an error if the expression does not parse.
    pub fn with_expression(expression: &str) -> Result<Self, SyntaxError> {
        let mut engine = Self::new();
        engine.set_expression(expression)?;
        Ok(engine)
    }

    /// Parse and install a new expression.
    ///
    /// # Errors
    ///
    /// Returns an error if the expression does not parse; the previously
    /// installed expression is kept in that case.
    pub fn set_expression(&mut self, expression: &str) -> Result<(), SyntaxError> {
        let postfix = convert(expression).inspect_err(|e| {
            warn!("Keeping previous expression, '{}' rejected: {}", expression, e);
        })?;
        info!("Expression set: '{}' (postfix: {})", expression, postfix);
        self.source = expression.to_string();
        self.postfix = postfix;
        Ok(())
    }

    pub fn set_bounds(&mut self, lower: f64, upper: f64) -> Option<Advisory> {
        let advisory = self.config.set_bounds(lower, upper);
        if let Some(advisory) = &advisory {
            warn!("{}", advisory);
        }
        info!(
            "Bounds set to [{}, {}]",
            self.config.lower(),
            self.config.upper()
        );
        advisory
    }

    pub fn set_subdivisions(&mut self, subdivisions: i64) -> Option<Advisory> {
        let advisory = self.config.set_subdivisions(subdivisions);
        if let Some(advisory) = &advisory {
            warn!("{}", advisory);
        }
        info!("Subdivisions set to {}", self.config.subdivisions());
        advisory
    }

    pub fn expression(&self) -> &str {
        &self.source
    }

    pub fn postfix(&self) -> &PostfixStream {
        &self.postfix
    }

    pub fn config(&self) -> &IntegrationConfig {
        &self.config
    }

    /// # Errors
    ///
    /// Returns an error if the expression cannot be evaluated at `x`.
    pub fn evaluate_at(&self, x: f64) -> Result<f64, EvalError> {
        self.postfix.evaluate(x)
    }

    /// Evaluate the expression at each of `points`, keeping per-point failures
    pub fn sample(&self, points: &[f64]) -> Vec<Sample> {
        points
            .iter()
            .map(|&x| Sample {
                x,
                value: self.evaluate_at(x),
            })
            .collect()
    }

    /// Run a single rule over the configured interval.
    ///
    /// # Errors
    ///
    /// Returns the first evaluation error hit while sampling.
    pub fn integrate(&self, rule: Rule) -> Result<f64, EvalError> {
        let result = rule.integrate(
            |x| {
                self.postfix
                    .evaluate(x)
                    .inspect_err(|e| trace!("{} sample at x = {} failed: {}", rule, x, e))
            },
            self.config.lower(),
            self.config.upper(),
            self.config.subdivisions(),
        );

        match &result {
            Ok(value) => debug!("{} evaluated to: {}", rule, value),
            Err(e) => debug!("{} failed: {}", rule, e),
        }

        result
    }

    /// Run every rule; a failure in one never affects the others
    pub fn compute_all(&self) -> IntegrationReport {
        info!(
            "Integrating '{}' over [{}, {}] with {} subdivisions",
            self.source,
            self.config.lower(),
            self.config.upper(),
            self.config.subdivisions()
        );

        let (trapezoidal, (simpson, midpoint)) = rayon::join(
            || self.integrate(Rule::Trapezoidal),
            || {
                rayon::join(
                    || self.integrate(Rule::Simpson),
                    || self.integrate(Rule::Midpoint),
                )
            },
        );

        IntegrationReport {
            trapezoidal,
            simpson,
            midpoint,
        }
    }
}

impl fmt::Display for QuadratureEngine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Expression:   {}", self.source)?;
        writeln!(f, "Postfix:      {}", self.postfix)?;
        writeln!(f, "Lower bound:  {}", self.config.lower())?;
        writeln!(f, "Upper bound:  {}", self.config.upper())?;
        write!(f, "Subdivisions: {}", self.config.subdivisions())
    }
}
