//! The calculator state machine.

use super::format::format_value;
use super::operator::Operator;
use super::record::CompletedCalculation;
use chrono::Utc;

/// Display sentinel shown after division by zero.
pub const ERROR_ENTRY: &str = "Error";

/// Maximum length of the typed entry; further digit or decimal input
/// is ignored once the cap is reached.
pub const MAX_ENTRY_LEN: usize = 32;

/// Interactive calculator engine.
///
/// The engine owns the current entry, the pending operand/operator pair,
/// and the memory register. All operations are synchronous state
/// transitions; the single recoverable error condition (division by
/// zero) surfaces as the [`ERROR_ENTRY`] display sentinel rather than a
/// `Result`, and is exited by any digit or clear input.
///
/// Chained expressions evaluate strictly left-to-right with no operator
/// precedence.
///
/// # Example
///
/// ```rust
/// use reckoner::engine::{Calculator, Operator};
///
/// let mut calculator = Calculator::new();
///
/// calculator.input_digit('2');
/// calculator.choose_operator(Operator::Add);
/// calculator.input_digit('3');
/// calculator.choose_operator(Operator::Multiply);
/// calculator.input_digit('4');
///
/// // (2 + 3) × 4, not 2 + (3 × 4)
/// let record = calculator.evaluate().unwrap();
/// assert_eq!(record.result, "20");
/// assert_eq!(calculator.entry(), "20");
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    current_entry: String,
    expression: String,
    pending_operand: Option<f64>,
    pending_operator: Option<Operator>,
    awaiting_fresh_entry: bool,
    memory: f64,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator in its initial state: entry `"0"`, no pending
    /// operand or operator, memory zero.
    pub fn new() -> Self {
        Self {
            current_entry: "0".to_string(),
            expression: String::new(),
            pending_operand: None,
            pending_operator: None,
            awaiting_fresh_entry: false,
            memory: 0.0,
        }
    }

    /// The current entry as shown on the display.
    pub fn entry(&self) -> &str {
        &self.current_entry
    }

    /// The pending-expression label, e.g. `"5 +"` after choosing an
    /// operator. Empty when no operator is pending.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The memory register. Survives [`clear_all`](Self::clear_all).
    pub fn memory(&self) -> f64 {
        self.memory
    }

    /// Type a digit.
    ///
    /// Starts a new entry when one is expected (after an operator or
    /// evaluation), replaces a lone `"0"` or the error sentinel, and
    /// appends otherwise. Non-digit characters are ignored, as is input
    /// beyond [`MAX_ENTRY_LEN`].
    pub fn input_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            return;
        }
        if self.awaiting_fresh_entry {
            self.current_entry = digit.to_string();
            self.awaiting_fresh_entry = false;
        } else if self.current_entry == "0" || self.current_entry == ERROR_ENTRY {
            self.current_entry = digit.to_string();
        } else if self.current_entry.len() < MAX_ENTRY_LEN {
            self.current_entry.push(digit);
        }
    }

    /// Type the decimal point.
    ///
    /// Starts a fresh `"0."` entry when one is expected; otherwise
    /// appends a point only if the entry does not already contain one,
    /// so pressing it twice is a no-op.
    pub fn input_decimal(&mut self) {
        if self.awaiting_fresh_entry {
            self.current_entry = "0.".to_string();
            self.awaiting_fresh_entry = false;
        } else if !self.current_entry.contains('.') && self.current_entry.len() < MAX_ENTRY_LEN {
            self.current_entry.push('.');
        }
    }

    /// Choose a binary operator.
    ///
    /// Captures the current entry as the pending operand. If an operator
    /// was already pending, the pending pair is evaluated first
    /// (left-to-right, no precedence) and its result becomes the new
    /// operand. Division by zero during that chained step enters the
    /// error state, same as [`evaluate`](Self::evaluate).
    pub fn choose_operator(&mut self, op: Operator) {
        let input_value = self.entry_value();

        match (self.pending_operand, self.pending_operator) {
            (None, _) => self.pending_operand = Some(input_value),
            (Some(operand), Some(pending)) => match pending.apply(operand, input_value) {
                Some(result) => {
                    self.current_entry = result.to_string();
                    self.pending_operand = Some(result);
                }
                None => {
                    self.enter_error_state();
                    return;
                }
            },
            (Some(_), None) => {}
        }

        self.pending_operator = Some(op);
        self.awaiting_fresh_entry = true;
        self.update_expression();
    }

    /// Evaluate the pending expression (the `=` action).
    ///
    /// Returns `None` unless an operator is pending and a second operand
    /// has actually been entered; pressing `=` right after an operator
    /// does nothing. On success the formatted result becomes the current
    /// entry, the pending state is cleared, and a
    /// [`CompletedCalculation`] is returned for the caller to record.
    /// On division by zero the entry becomes [`ERROR_ENTRY`] and no
    /// record is produced.
    pub fn evaluate(&mut self) -> Option<CompletedCalculation> {
        let operand = self.pending_operand?;
        let op = self.pending_operator?;
        if self.awaiting_fresh_entry {
            return None;
        }

        let current = self.entry_value();
        match op.apply(operand, current) {
            Some(result) => {
                let result_text = format_value(result);
                let expression = format!("{} {} {} =", operand, op.symbol(), current);

                self.current_entry = result_text.clone();
                self.expression.clear();
                self.pending_operand = None;
                self.pending_operator = None;
                self.awaiting_fresh_entry = true;

                Some(CompletedCalculation {
                    expression,
                    result: result_text,
                    timestamp: Utc::now(),
                })
            }
            None => {
                self.enter_error_state();
                None
            }
        }
    }

    /// Reset everything except the memory register.
    pub fn clear_all(&mut self) {
        self.current_entry = "0".to_string();
        self.expression.clear();
        self.pending_operand = None;
        self.pending_operator = None;
        self.awaiting_fresh_entry = false;
    }

    /// Reset only the current entry; a pending operator/operand chain is
    /// preserved.
    pub fn clear_entry(&mut self) {
        self.current_entry = "0".to_string();
        self.awaiting_fresh_entry = false;
    }

    /// Negate the current entry. No-op when the entry is numerically
    /// zero.
    pub fn toggle_sign(&mut self) {
        let current = self.entry_value();
        if current != 0.0 {
            self.current_entry = (-current).to_string();
        }
    }

    /// Remove the last typed character.
    ///
    /// Falls back to [`clear_entry`](Self::clear_entry) when the entry is
    /// a single character, the error sentinel, or would be left empty or
    /// as a bare `"-"`.
    pub fn backspace(&mut self) {
        if self.current_entry.len() > 1 && self.current_entry != ERROR_ENTRY {
            self.current_entry.pop();
            self.awaiting_fresh_entry = false;
            if self.current_entry.is_empty() || self.current_entry == "-" {
                self.clear_entry();
            }
        } else {
            self.clear_entry();
        }
    }

    /// Set the entry to a computed value, formatted for display.
    ///
    /// Used by unary functions such as [`square_root`](Self::square_root)
    /// and [`square`](Self::square); callers computing their own unary
    /// results use it the same way.
    pub fn set_value(&mut self, value: f64) {
        self.current_entry = format_value(value);
        self.awaiting_fresh_entry = true;
    }

    /// Replace the entry with its square root. Negative input clamps the
    /// result to zero.
    pub fn square_root(&mut self) {
        let current = self.entry_value();
        if current >= 0.0 {
            self.set_value(current.sqrt());
        } else {
            self.set_value(0.0);
        }
    }

    /// Replace the entry with its square.
    pub fn square(&mut self) {
        let current = self.entry_value();
        self.set_value(current * current);
    }

    /// Reset the memory register to zero.
    pub fn memory_clear(&mut self) {
        self.memory = 0.0;
    }

    /// Recall the memory register into the current entry.
    pub fn memory_recall(&mut self) {
        self.current_entry = self.memory.to_string();
        self.awaiting_fresh_entry = true;
    }

    /// Store the current entry into the memory register.
    pub fn memory_store(&mut self) {
        self.memory = self.entry_value();
    }

    /// Add the current entry to the memory register.
    pub fn memory_add(&mut self) {
        self.memory += self.entry_value();
    }

    /// Subtract the current entry from the memory register.
    pub fn memory_subtract(&mut self) {
        self.memory -= self.entry_value();
    }

    /// Numeric value of the current entry. The error sentinel (or any
    /// unparsable entry) evaluates to zero.
    fn entry_value(&self) -> f64 {
        self.current_entry.parse().unwrap_or(0.0)
    }

    fn update_expression(&mut self) {
        if let (Some(operand), Some(op)) = (self.pending_operand, self.pending_operator) {
            self.expression = format!("{} {}", operand, op.symbol());
        }
    }

    fn enter_error_state(&mut self) {
        self.current_entry = ERROR_ENTRY.to_string();
        self.expression.clear();
        self.pending_operand = None;
        self.pending_operator = None;
        self.awaiting_fresh_entry = true;
    }
}
