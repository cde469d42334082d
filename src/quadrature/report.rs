use std::fmt;

use crate::expression::EvalError;
use crate::quadrature::rules::Rule;

/// Outcome of every rule for one expression and configuration
#[derive(Debug, Clone, PartialEq)]
pub struct IntegrationReport {
    pub trapezoidal: Result<f64, EvalError>,
    pub simpson: Result<f64, EvalError>,
    pub midpoint: Result<f64, EvalError>,
}

impl IntegrationReport {
    pub fn get(&self, rule: Rule) -> &Result<f64, EvalError> {
        match rule {
            Rule::Trapezoidal => &self.trapezoidal,
            Rule::Simpson => &self.simpson,
            Rule::Midpoint => &self.midpoint,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Rule, &Result<f64, EvalError>)> {
        Rule::ALL.into_iter().map(move |rule| (rule, self.get(rule)))
    }
}

impl fmt::Display for IntegrationReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (rule, result) in self.iter() {
            let label = format!("{}:", rule.name());
            match result {
                Ok(value) => writeln!(f, "{:<19}{}", label, value)?,
                Err(e) => writeln!(f, "{:<19}Error - {}", label, e)?,
            }
        }
        Ok(())
    }
}

/// Value of the expression at a single point
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub value: Result<f64, EvalError>,
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.value {
            Ok(value) => write!(f, "f({}) = {}", self.x, value),
            Err(e) => write!(f, "f({}) = Error: {}", self.x, e),
        }
    }
}
