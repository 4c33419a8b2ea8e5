//! Keyboard-to-action mapping for presentation layers.
//!
//! The engine itself never sees key events; callers translate them into
//! method calls. This module provides the shared translation table so
//! every caller binds the same keys the same way.

use super::calculator::Calculator;
use super::operator::Operator;
use super::record::CompletedCalculation;

/// A calculator action resolved from a keyboard key.
///
/// # Example
///
/// ```rust
/// use reckoner::engine::{Calculator, KeyAction};
///
/// let mut calculator = Calculator::new();
/// let mut last_record = None;
///
/// for key in ["2", "+", "3", "Enter"] {
///     if let Some(action) = KeyAction::from_key(key) {
///         last_record = action.apply(&mut calculator);
///     }
/// }
///
/// assert_eq!(calculator.entry(), "5");
/// assert_eq!(last_record.unwrap().expression, "2 + 3 =");
/// ```
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum KeyAction {
    Digit(char),
    Decimal,
    Operator(Operator),
    Evaluate,
    ClearAll,
    Backspace,
}

impl KeyAction {
    /// Resolve a key (in browser `KeyboardEvent.key` convention) to an
    /// action.
    ///
    /// Digits map to themselves; `.` and `,` both type the decimal
    /// point; `+ - * / %` choose operators; `=` and `Enter` evaluate;
    /// `Escape`, `c` and `C` clear; `Backspace` deletes. Anything else
    /// resolves to `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "." | "," => Some(Self::Decimal),
            "=" | "Enter" => Some(Self::Evaluate),
            "Escape" | "c" | "C" => Some(Self::ClearAll),
            "Backspace" => Some(Self::Backspace),
            _ => {
                let mut chars = key.chars();
                let c = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                if c.is_ascii_digit() {
                    Some(Self::Digit(c))
                } else {
                    Operator::from_key(c).map(Self::Operator)
                }
            }
        }
    }

    /// Apply the action to a calculator. Only [`Evaluate`](Self::Evaluate)
    /// can produce a completed-calculation record.
    pub fn apply(&self, calculator: &mut Calculator) -> Option<CompletedCalculation> {
        match self {
            Self::Digit(d) => {
                calculator.input_digit(*d);
                None
            }
            Self::Decimal => {
                calculator.input_decimal();
                None
            }
            Self::Operator(op) => {
                calculator.choose_operator(*op);
                None
            }
            Self::Evaluate => calculator.evaluate(),
            Self::ClearAll => {
                calculator.clear_all();
                None
            }
            Self::Backspace => {
                calculator.backspace();
                None
            }
        }
    }
}
