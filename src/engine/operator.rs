//! Binary arithmetic operators and the rule table that evaluates them.

use serde::{Deserialize, Serialize};

/// Binary arithmetic operator kind.
///
/// Operators carry no precedence. The calculator evaluates chained
/// expressions strictly left-to-right, so `2 + 3 × 4` yields `20`.
///
/// # Example
///
/// ```rust
/// use reckoner::engine::Operator;
///
/// assert_eq!(Operator::Add.apply(2.0, 3.0), Some(5.0));
/// assert_eq!(Operator::Divide.apply(5.0, 0.0), None);
/// assert_eq!(Operator::Multiply.symbol(), "×");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl Operator {
    /// Get the display symbol used in expression labels and history entries.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Modulo => "%",
        }
    }

    /// Map a keyboard character to an operator.
    ///
    /// Follows the conventional bindings: `*` is multiplication and
    /// `/` is division.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reckoner::engine::Operator;
    ///
    /// assert_eq!(Operator::from_key('*'), Some(Operator::Multiply));
    /// assert_eq!(Operator::from_key('x'), None);
    /// ```
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '%' => Some(Self::Modulo),
            _ => None,
        }
    }

    /// Apply the operator to a pair of operands.
    ///
    /// Returns `None` only for division by zero, the calculator's single
    /// recoverable error condition. Modulo uses Rust's remainder
    /// semantics: the sign of the result follows the dividend.
    pub fn apply(&self, a: f64, b: f64) -> Option<f64> {
        match self {
            Self::Add => Some(a + b),
            Self::Subtract => Some(a - b),
            Self::Multiply => Some(a * b),
            Self::Divide => {
                if b == 0.0 {
                    None
                } else {
                    Some(a / b)
                }
            }
            Self::Modulo => Some(a % b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_table_computes_basic_arithmetic() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), Some(5.0));
        assert_eq!(Operator::Subtract.apply(2.0, 3.0), Some(-1.0));
        assert_eq!(Operator::Multiply.apply(2.0, 3.0), Some(6.0));
        assert_eq!(Operator::Divide.apply(3.0, 2.0), Some(1.5));
        assert_eq!(Operator::Modulo.apply(7.0, 3.0), Some(1.0));
    }

    #[test]
    fn divide_by_zero_yields_none() {
        assert_eq!(Operator::Divide.apply(5.0, 0.0), None);
        assert_eq!(Operator::Divide.apply(0.0, 0.0), None);
        assert_eq!(Operator::Divide.apply(5.0, -0.0), None);
    }

    #[test]
    fn modulo_sign_follows_dividend() {
        assert_eq!(Operator::Modulo.apply(-7.0, 3.0), Some(-1.0));
        assert_eq!(Operator::Modulo.apply(7.0, -3.0), Some(1.0));
    }

    #[test]
    fn symbols_match_display_conventions() {
        assert_eq!(Operator::Add.symbol(), "+");
        assert_eq!(Operator::Subtract.symbol(), "-");
        assert_eq!(Operator::Multiply.symbol(), "×");
        assert_eq!(Operator::Divide.symbol(), "÷");
        assert_eq!(Operator::Modulo.symbol(), "%");
    }

    #[test]
    fn from_key_maps_keyboard_characters() {
        assert_eq!(Operator::from_key('+'), Some(Operator::Add));
        assert_eq!(Operator::from_key('-'), Some(Operator::Subtract));
        assert_eq!(Operator::from_key('*'), Some(Operator::Multiply));
        assert_eq!(Operator::from_key('/'), Some(Operator::Divide));
        assert_eq!(Operator::from_key('%'), Some(Operator::Modulo));
        assert_eq!(Operator::from_key('='), None);
    }
}
