use std::fmt;

use thiserror::Error;

/// Which way a parenthesis imbalance went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParenImbalance {
    ExtraClosing,
    MissingClosing,
    MissingOpening,
}

impl fmt::Display for ParenImbalance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParenImbalance::ExtraClosing => write!(f, "extra closing ')'"),
            ParenImbalance::MissingClosing => write!(f, "missing closing ')'"),
            ParenImbalance::MissingOpening => write!(f, "missing opening '('"),
        }
    }
}

/// Errors raised while converting infix text to postfix
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyntaxError {
    #[error("Unbalanced parentheses: {0}")]
    UnbalancedParentheses(ParenImbalance),
    #[error("Function '{0}' must be followed by a parenthesized argument")]
    UnappliedFunction(String),
    #[error("Invalid number '{literal}' at position {position}")]
    InvalidNumber { literal: String, position: usize },
    #[error("Unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },
}

/// Errors raised while evaluating a postfix stream
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Invalid expression: not enough operands for '{token}'")]
    MissingOperand { token: String },
    #[error("Unknown token '{0}'")]
    UnknownToken(String),
    #[error("Domain error: {function} is undefined at {argument}")]
    DomainError {
        function: &'static str,
        argument: f64,
    },
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Invalid expression: no result computed")]
    EmptyResult,
}
