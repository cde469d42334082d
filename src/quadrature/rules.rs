use std::fmt;

use crate::expression::EvalError;

/// Numerical integration rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Trapezoidal,
    Simpson,
    Midpoint,
}

impl Rule {
    pub const ALL: [Rule; 3] = [Rule::Trapezoidal, Rule::Simpson, Rule::Midpoint];

    pub fn name(self) -> &'static str {
        match self {
            Rule::Trapezoidal => "Trapezoidal Rule",
            Rule::Simpson => "Simpson's Rule",
            Rule::Midpoint => "Midpoint Rule",
        }
    }

    /// Subdivisions actually used for a requested count.
    ///
    /// Simpson's rule needs an even count, so odd counts are bumped by one
    /// (or lowered by one when `usize::MAX` leaves no room above).
    pub fn effective_subdivisions(self, requested: usize) -> usize {
        let n = requested.max(1);
        match self {
            Rule::Simpson if n % 2 != 0 => n.checked_add(1).unwrap_or(n - 1),
            _ => n,
        }
    }

    /// Approximate the integral of `f` over `[lower, upper]`.
    ///
    /// Samples are taken in increasing `x` order and the first failing
    /// sample aborts the rule.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    pub fn integrate<F>(
        self,
        f: F,
        lower: f64,
        upper: f64,
        subdivisions: usize,
    ) -> Result<f64, EvalError>
    where
        F: Fn(f64) -> Result<f64, EvalError>,
    {
        let n = self.effective_subdivisions(subdivisions);
        let h = (upper - lower) / n as f64;

        match self {
            Rule::Trapezoidal => {
                let first = f(lower)?;
                let mut interior = 0.0;
                for i in 1..n {
                    interior += f(lower + i as f64 * h)?;
                }
                let last = f(upper)?;
                Ok(h * (0.5 * (first + last) + interior))
            }
            Rule::Simpson => {
                let first = f(lower)?;
                let mut interior = 0.0;
                for i in 1..n {
                    let weight = if i % 2 == 0 { 2.0 } else { 4.0 };
                    interior += weight * f(lower + i as f64 * h)?;
                }
                let last = f(upper)?;
                Ok(h / 3.0 * (first + last + interior))
            }
            Rule::Midpoint => {
                let mut sum = 0.0;
                for i in 0..n {
                    sum += f(lower + (i as f64 + 0.5) * h)?;
                }
                Ok(h * sum)
            }
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
