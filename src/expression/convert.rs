use log::debug;

use crate::expression::constants::CONSTANTS;
use crate::expression::errors::{ParenImbalance, SyntaxError};
use crate::expression::postfix::PostfixStream;
use crate::expression::token::{Associativity, BinaryOp, Token};

/// Entry on the converter's operator stack
#[derive(Debug, Clone, PartialEq)]
enum StackEntry {
    Operator(BinaryOp),
    LeftParen,
    /// Function waiting for its parenthesized argument to close
    Function(String),
}

impl StackEntry {
    fn precedence(&self) -> u8 {
        match self {
            StackEntry::Operator(op) => op.precedence(),
            StackEntry::LeftParen | StackEntry::Function(_) => 0,
        }
    }
}

/// Collect the run of characters starting at `start` that satisfy `accept`.
/// Returns the run and the index just past it.
fn take_run(chars: &[char], start: usize, accept: impl Fn(char) -> bool) -> (String, usize) {
    let mut end = start;
    let mut run = String::new();
    while let Some(&c) = chars.get(end) {
        if !accept(c) {
            break;
        }
        run.push(c);
        end += 1;
    }
    (run, end)
}

fn starts_number(chars: &[char], i: usize) -> bool {
    match chars.get(i) {
        Some(c) if c.is_ascii_digit() => true,
        Some('.') => chars.get(i + 1).is_some_and(|next| next.is_ascii_digit()),
        _ => false,
    }
}

/// Convert an infix expression in `x` to postfix with the shunting-yard
/// algorithm.
///
/// There is no unary minus: a leading `-` becomes binary subtraction and
/// only fails later, at evaluation, for lack of a left operand.
///
/// A function's argument must be parenthesized on its own: `sin x` and
/// `(sin x)` are both rejected with [`SyntaxError::UnappliedFunction`],
/// even though the enclosing parentheses balance. Write `sin(x)` instead.
///
/// # Errors
///
/// Returns an error when:
/// - Parentheses do not balance
/// - A function name is not followed by a parenthesized argument
/// - A run of digits and dots is not a valid number
/// - A character outside the grammar appears
pub fn convert(expression: &str) -> Result<PostfixStream, SyntaxError> {
    debug!("Converting expression: '{}'", expression);

    let chars: Vec<char> = expression.chars().collect();
    let mut output: Vec<Token> = Vec::new();
    let mut stack: Vec<StackEntry> = Vec::new();
    let mut open_parens: usize = 0;
    let mut i = 0;

    while let Some(&c) = chars.get(i) {
        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if starts_number(&chars, i) {
            let (literal, end) = take_run(&chars, i, |ch| ch.is_ascii_digit() || ch == '.');
            let value = literal
                .parse::<f64>()
                .map_err(|_| SyntaxError::InvalidNumber {
                    literal: literal.clone(),
                    position: i,
                })?;
            output.push(Token::Number(value));
            i = end;
            continue;
        }

        if c.is_ascii_alphabetic() {
            let (word, end) = take_run(&chars, i, |ch| ch.is_ascii_alphabetic());
            let word = word.to_ascii_lowercase();
            i = end;

            if word == "x" {
                output.push(Token::Variable);
            } else if let Some(&(name, value)) =
                CONSTANTS.iter().find(|(name, _)| *name == word)
            {
                output.push(Token::Constant { name, value });
            } else {
                stack.push(StackEntry::Function(word));
            }
            continue;
        }

        match c {
            '(' => {
                stack.push(StackEntry::LeftParen);
                open_parens += 1;
            }
            ')' => {
                if open_parens == 0 {
                    debug!("Extra closing parenthesis at position {}", i);
                    return Err(SyntaxError::UnbalancedParentheses(
                        ParenImbalance::ExtraClosing,
                    ));
                }
                open_parens -= 1;

                loop {
                    match stack.pop() {
                        Some(StackEntry::LeftParen) => break,
                        Some(StackEntry::Operator(op)) => output.push(Token::Operator(op)),
                        Some(StackEntry::Function(name)) => {
                            return Err(SyntaxError::UnappliedFunction(name));
                        }
                        None => {
                            return Err(SyntaxError::UnbalancedParentheses(
                                ParenImbalance::MissingOpening,
                            ));
                        }
                    }
                }

                if matches!(stack.last(), Some(StackEntry::Function(_)))
                    && let Some(StackEntry::Function(name)) = stack.pop()
                {
                    output.push(Token::Function(name));
                }
            }
            _ => {
                let Some(op) = BinaryOp::from_symbol(c) else {
                    debug!("Unexpected character '{}' at position {}", c, i);
                    return Err(SyntaxError::UnexpectedCharacter { ch: c, position: i });
                };

                let incoming = op.precedence();
                let left_assoc = op.associativity() == Associativity::Left;
                while let Some(top) = stack.last() {
                    let top_precedence = top.precedence();
                    if top_precedence > incoming || (top_precedence == incoming && left_assoc) {
                        if let Some(StackEntry::Operator(top)) = stack.pop() {
                            output.push(Token::Operator(top));
                        }
                    } else {
                        break;
                    }
                }
                stack.push(StackEntry::Operator(op));
            }
        }
        i += 1;
    }

    if open_parens != 0 {
        debug!("{} parenthesis(es) left open", open_parens);
        return Err(SyntaxError::UnbalancedParentheses(
            ParenImbalance::MissingClosing,
        ));
    }

    while let Some(entry) = stack.pop() {
        match entry {
            StackEntry::Operator(op) => output.push(Token::Operator(op)),
            StackEntry::LeftParen => {
                return Err(SyntaxError::UnbalancedParentheses(
                    ParenImbalance::MissingClosing,
                ));
            }
            StackEntry::Function(name) => return Err(SyntaxError::UnappliedFunction(name)),
        }
    }

    let stream = PostfixStream::new(output);
    debug!("Postfix form: {}", stream);
    Ok(stream)
}
