//! Operators and the commands the machine accepts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operator awaiting its right-hand operand.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Percent,
}

impl Operator {
    /// Symbol shown on the keypad.
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
            Self::Percent => '%',
        }
    }

    /// Parse an operator symbol, accepting both ASCII and keypad forms.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | 'x' | 'X' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            '%' => Some(Self::Percent),
            _ => None,
        }
    }

    /// True for the operators a contextual percentage applies to.
    pub const fn is_additive(&self) -> bool {
        matches!(self, Self::Add | Self::Subtract)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Every input the calculator understands.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Command {
    Digit(u8),
    DecimalPoint,
    Operator(Operator),
    Equals,
    Clear,
    Backspace,
    Percent,
    MemoryAdd,
    MemorySubtract,
    MemoryRecall,
    MemoryClear,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "digit {d}"),
            Self::DecimalPoint => f.write_str("decimal point"),
            Self::Operator(op) => write!(f, "operator {op}"),
            Self::Equals => f.write_str("equals"),
            Self::Clear => f.write_str("clear"),
            Self::Backspace => f.write_str("backspace"),
            Self::Percent => f.write_str("percent"),
            Self::MemoryAdd => f.write_str("M+"),
            Self::MemorySubtract => f.write_str("M-"),
            Self::MemoryRecall => f.write_str("MR"),
            Self::MemoryClear => f.write_str("MC"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_parse_back() {
        for op in [
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
            Operator::Percent,
        ] {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
    }

    #[test]
    fn ascii_aliases() {
        assert_eq!(Operator::from_symbol('*'), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol('x'), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol('/'), Some(Operator::Divide));
        assert_eq!(Operator::from_symbol('='), None);
    }

    #[test]
    fn additive_operators() {
        assert!(Operator::Add.is_additive());
        assert!(Operator::Subtract.is_additive());
        assert!(!Operator::Multiply.is_additive());
        assert!(!Operator::Divide.is_additive());
        assert!(!Operator::Percent.is_additive());
    }

    #[test]
    fn command_labels() {
        assert_eq!(Command::Digit(7).to_string(), "digit 7");
        assert_eq!(Command::Operator(Operator::Add).to_string(), "operator +");
        assert_eq!(Command::MemoryRecall.to_string(), "MR");
    }
}
