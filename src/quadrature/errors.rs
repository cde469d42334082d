use thiserror::Error;

use crate::expression::{EvalError, SyntaxError};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuadratureError {
    #[error("Syntax error: {0}")]
    SyntaxError(#[from] SyntaxError),
    #[error("Evaluation error: {0}")]
    EvalError(#[from] EvalError),
}
