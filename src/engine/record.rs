//! Completed-calculation records emitted by the engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single completed calculation.
///
/// Records are immutable values produced exactly once per successful
/// evaluation. The engine hands them to the caller, which typically
/// forwards them to a [`HistoryStore`](crate::history::HistoryStore);
/// the engine itself never holds on to them.
///
/// # Example
///
/// ```rust
/// use reckoner::engine::Calculator;
///
/// let mut calculator = Calculator::new();
/// calculator.input_digit('6');
/// calculator.choose_operator(reckoner::engine::Operator::Multiply);
/// calculator.input_digit('7');
///
/// let record = calculator.evaluate().unwrap();
/// assert_eq!(record.expression, "6 × 7 =");
/// assert_eq!(record.result, "42");
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CompletedCalculation {
    /// The full expression, e.g. `"6 × 7 ="`
    pub expression: String,
    /// The formatted result as shown on the display
    pub result: String,
    /// When the evaluation happened
    pub timestamp: DateTime<Utc>,
}
