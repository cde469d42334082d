use std::fmt;

/// Grouping direction for operators of equal precedence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// Binary arithmetic operators understood by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    /// Operator table lookup by source symbol
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(BinaryOp::Add),
            '-' => Some(BinaryOp::Sub),
            '*' => Some(BinaryOp::Mul),
            '/' => Some(BinaryOp::Div),
            '^' => Some(BinaryOp::Pow),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
            BinaryOp::Pow => '^',
        }
    }

    /// Binding strength; structural stack entries sit at 0, below all of these.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 2,
            BinaryOp::Mul | BinaryOp::Div => 3,
            BinaryOp::Pow => 4,
        }
    }

    pub fn associativity(self) -> Associativity {
        match self {
            BinaryOp::Pow => Associativity::Right,
            _ => Associativity::Left,
        }
    }
}

/// A single postfix token
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Variable,
    /// Named constant, resolved to its value when converted
    Constant { name: &'static str, value: f64 },
    Operator(BinaryOp),
    Function(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Variable => write!(f, "x"),
            Token::Constant { name, .. } => write!(f, "{}", name),
            Token::Operator(op) => write!(f, "{}", op.symbol()),
            Token::Function(name) => write!(f, "{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_table() {
        for symbol in ['+', '-', '*', '/', '^'] {
            let op = BinaryOp::from_symbol(symbol);
            assert!(op.is_some());
            if let Some(op) = op {
                assert_eq!(op.symbol(), symbol);
            }
        }
        assert_eq!(BinaryOp::from_symbol('%'), None);
        assert_eq!(BinaryOp::from_symbol('('), None);
    }

    #[test]
    fn test_precedence_ordering() {
        assert!(BinaryOp::Pow.precedence() > BinaryOp::Mul.precedence());
        assert_eq!(BinaryOp::Mul.precedence(), BinaryOp::Div.precedence());
        assert!(BinaryOp::Div.precedence() > BinaryOp::Add.precedence());
        assert_eq!(BinaryOp::Add.precedence(), BinaryOp::Sub.precedence());
    }

    #[test]
    fn test_only_power_is_right_associative() {
        assert_eq!(BinaryOp::Pow.associativity(), Associativity::Right);
        for op in [BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div] {
            assert_eq!(op.associativity(), Associativity::Left);
        }
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::Number(2.5).to_string(), "2.5");
        assert_eq!(Token::Number(100.0).to_string(), "100");
        assert_eq!(Token::Variable.to_string(), "x");
        assert_eq!(
            Token::Constant {
                name: "pi",
                value: std::f64::consts::PI
            }
            .to_string(),
            "pi"
        );
        assert_eq!(Token::Operator(BinaryOp::Pow).to_string(), "^");
        assert_eq!(Token::Function("sqrt".to_string()).to_string(), "sqrt");
    }
}
