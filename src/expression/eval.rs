use log::trace;

use crate::expression::constants::DIVISION_EPSILON;
use crate::expression::errors::EvalError;
use crate::expression::functions::lookup_function;
use crate::expression::postfix::PostfixStream;
use crate::expression::token::{BinaryOp, Token};

#[inline]
fn is_zero(value: f64) -> bool {
    value.abs() < DIVISION_EPSILON
}

fn apply_binary(op: BinaryOp, left: f64, right: f64) -> Result<f64, EvalError> {
    match op {
        BinaryOp::Add => Ok(left + right),
        BinaryOp::Sub => Ok(left - right),
        BinaryOp::Mul => Ok(left * right),
        BinaryOp::Div => {
            if is_zero(right) {
                Err(EvalError::DivisionByZero)
            } else {
                Ok(left / right)
            }
        }
        BinaryOp::Pow => Ok(left.powf(right)),
    }
}

impl PostfixStream {
    /// Evaluate the stream with the variable bound to `x`.
    ///
    /// When the scan leaves more than one value on the stack, the top one
    /// is returned.
    ///
    /// # Errors
    ///
    /// Returns an error when:
    /// - An operator or function finds too few operands
    /// - A function name is not a known built-in
    /// - `log`/`ln` get a non-positive or `sqrt` a negative argument
    /// - A divisor is within `1e-15` of zero
    /// - The stream produces no value at all
    pub fn evaluate(&self, x: f64) -> Result<f64, EvalError> {
        let mut stack: Vec<f64> = Vec::with_capacity(self.len());

        for token in self.tokens() {
            match token {
                Token::Number(n) => stack.push(*n),
                Token::Variable => stack.push(x),
                Token::Constant { value, .. } => stack.push(*value),
                Token::Function(name) => {
                    let function = lookup_function(name)
                        .ok_or_else(|| EvalError::UnknownToken(name.clone()))?;
                    let argument = stack.pop().ok_or_else(|| EvalError::MissingOperand {
                        token: name.clone(),
                    })?;
                    stack.push(function.call(argument)?);
                }
                Token::Operator(op) => {
                    let missing = || EvalError::MissingOperand {
                        token: op.symbol().to_string(),
                    };
                    let right = stack.pop().ok_or_else(missing)?;
                    let left = stack.pop().ok_or_else(missing)?;
                    stack.push(apply_binary(*op, left, right)?);
                }
            }
        }

        if stack.len() > 1 {
            trace!("{} values left on the stack at x = {}", stack.len(), x);
        }
        stack.pop().ok_or(EvalError::EmptyResult)
    }
}
