//! The calculator engine.
//!
//! This module contains the interactive calculator state machine:
//! - Sequential digit and decimal-point entry
//! - Chained left-to-right evaluation with no operator precedence
//! - Memory-register arithmetic
//! - Result formatting and completed-calculation records
//!
//! All operations are synchronous state transitions with no suspension
//! points. The engine never aborts: every input sequence resolves to a
//! defined state, with division by zero surfacing as a recoverable
//! display sentinel.

mod calculator;
mod format;
mod keymap;
mod operator;
mod record;

pub use calculator::{Calculator, ERROR_ENTRY, MAX_ENTRY_LEN};
pub use format::format_value;
pub use keymap::KeyAction;
pub use operator::Operator;
pub use record::CompletedCalculation;
