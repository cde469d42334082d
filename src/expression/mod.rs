//! Expression engine: infix text to postfix tokens, and postfix evaluation

pub mod constants;
mod convert;
mod errors;
mod eval;
pub mod functions;
mod postfix;
mod token;

pub use convert::convert;
pub use errors::{EvalError, ParenImbalance, SyntaxError};
pub use postfix::PostfixStream;
pub use token::{Associativity, BinaryOp, Token};
