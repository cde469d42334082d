use crate::expression::errors::EvalError;

/// Arguments a built-in function accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Unrestricted,
    Positive,
    NonNegative,
}

impl Domain {
    /// Only arguments known to lie outside the domain are refused; NaN
    /// passes through to the math call and comes back as NaN.
    #[inline]
    pub fn admits(self, argument: f64) -> bool {
        match self {
            Domain::Unrestricted => true,
            Domain::Positive => argument.is_nan() || argument > 0.0,
            Domain::NonNegative => argument.is_nan() || argument >= 0.0,
        }
    }
}

/// Registry entry for a unary built-in
#[derive(Debug)]
pub struct UnaryFunction {
    pub name: &'static str,
    pub domain: Domain,
    apply: fn(f64) -> f64,
}

impl UnaryFunction {
    /// # Errors
    ///
    /// Returns `EvalError::DomainError` when the argument lies outside the
    /// function's domain. The check happens before the math call.
    pub fn call(&self, argument: f64) -> Result<f64, EvalError> {
        if !self.domain.admits(argument) {
            return Err(EvalError::DomainError {
                function: self.name,
                argument,
            });
        }
        Ok((self.apply)(argument))
    }
}

pub static FUNCTIONS: [UnaryFunction; 8] = [
    UnaryFunction {
        name: "sin",
        domain: Domain::Unrestricted,
        apply: f64::sin,
    },
    UnaryFunction {
        name: "cos",
        domain: Domain::Unrestricted,
        apply: f64::cos,
    },
    UnaryFunction {
        name: "tan",
        domain: Domain::Unrestricted,
        apply: f64::tan,
    },
    UnaryFunction {
        name: "log",
        domain: Domain::Positive,
        apply: f64::log10,
    },
    UnaryFunction {
        name: "ln",
        domain: Domain::Positive,
        apply: f64::ln,
    },
    UnaryFunction {
        name: "sqrt",
        domain: Domain::NonNegative,
        apply: f64::sqrt,
    },
    UnaryFunction {
        name: "abs",
        domain: Domain::Unrestricted,
        apply: f64::abs,
    },
    UnaryFunction {
        name: "exp",
        domain: Domain::Unrestricted,
        apply: f64::exp,
    },
];

/// Look up a built-in by its lowercase name
pub fn lookup_function(name: &str) -> Option<&'static UnaryFunction> {
    FUNCTIONS.iter().find(|function| function.name == name)
}
