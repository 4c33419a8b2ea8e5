//! Reckoner: a calculator engine and persistent history library
//!
//! Reckoner separates an interactive calculator into two explicitly
//! owned components that a caller composes:
//!
//! - **Engine**: the calculator state machine. Owns the current entry,
//!   the pending operand/operator pair and the memory register,
//!   evaluates chained expressions left-to-right (no precedence), and
//!   emits an immutable [`CompletedCalculation`] record per evaluation.
//! - **History**: an ordered, newest-first log of completed
//!   calculations, mirrored write-through into durable key-value
//!   storage and restored on construction.
//!
//! The engine never talks to the store. The caller (typically a UI
//! event loop) forwards records from one to the other, which keeps the
//! components independently testable.
//!
//! # Example
//!
//! ```rust
//! use reckoner::{Calculator, HistoryStore, MemoryStorage, Operator};
//!
//! let mut calculator = Calculator::new();
//! let mut history = HistoryStore::load(MemoryStorage::new());
//!
//! calculator.input_digit('2');
//! calculator.choose_operator(Operator::Add);
//! calculator.input_digit('3');
//! // Choosing the next operator already folds 2 + 3 into 5
//! calculator.choose_operator(Operator::Multiply);
//! calculator.input_digit('4');
//!
//! if let Some(record) = calculator.evaluate() {
//!     history.append(record).unwrap();
//! }
//!
//! assert_eq!(calculator.entry(), "20");
//! assert_eq!(history.entries()[0].expression, "5 × 4 =");
//! ```

pub mod engine;
pub mod history;

// Re-export commonly used types
pub use engine::{Calculator, CompletedCalculation, KeyAction, Operator};
pub use history::{FileStorage, HistoryStore, KeyValueStorage, MemoryStorage};
