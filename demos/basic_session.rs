//! Basic Calculator Session
//!
//! This example demonstrates driving the engine directly and
//! forwarding completed calculations to an in-memory history store.
//!
//! Key concepts:
//! - Chained left-to-right evaluation (no operator precedence)
//! - The division-by-zero sentinel and recovery
//! - Unary helpers built on `set_value`
//!
//! Run with: cargo run --example basic_session

use reckoner::{Calculator, HistoryStore, MemoryStorage, Operator};

fn main() {
    println!("=== Basic Calculator Session ===\n");

    let mut calculator = Calculator::new();
    let mut history = HistoryStore::load(MemoryStorage::new());

    // 2 + 3 × 4 evaluates as (2 + 3) × 4
    calculator.input_digit('2');
    calculator.choose_operator(Operator::Add);
    calculator.input_digit('3');
    println!("After '2 + 3':  expression = {:?}", calculator.expression());
    calculator.choose_operator(Operator::Multiply);
    println!("Chained fold:   entry = {:?}", calculator.entry());
    calculator.input_digit('4');

    if let Some(record) = calculator.evaluate() {
        println!("Evaluated:      {} {}", record.expression, record.result);
        history.append(record).expect("history write");
    }

    // Division by zero never panics; the display shows the sentinel
    calculator.input_digit('5');
    calculator.choose_operator(Operator::Divide);
    calculator.input_digit('0');
    assert!(calculator.evaluate().is_none());
    println!("5 ÷ 0:          entry = {:?}", calculator.entry());

    // Any digit input recovers from the error state
    calculator.input_digit('9');
    calculator.square_root();
    println!("√9:             entry = {:?}", calculator.entry());

    println!("\nHistory (newest first):");
    for entry in history.entries() {
        println!("  {} {}", entry.expression, entry.result);
    }
}
