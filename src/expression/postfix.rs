use std::fmt;

use crate::expression::token::Token;

/// Parsed expression in postfix order.
///
/// Built once by [`convert`](crate::expression::convert) and only read
/// afterwards, so it can be shared freely between evaluating threads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostfixStream {
    tokens: Vec<Token>,
}

impl PostfixStream {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for PostfixStream {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut tokens = self.tokens.iter();
        if let Some(first) = tokens.next() {
            write!(f, "{}", first)?;
            for token in tokens {
                write!(f, " {}", token)?;
            }
        }
        Ok(())
    }
}
