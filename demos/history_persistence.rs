//! Durable Calculation History
//!
//! This example demonstrates the write-through history store backed by
//! files, and the keyboard-action mapping a presentation layer would
//! use. Run it twice: the second run starts with the first run's
//! calculations already loaded.
//!
//! Run with: cargo run --example history_persistence

use reckoner::{Calculator, FileStorage, HistoryStore, KeyAction};

fn main() {
    let storage = FileStorage::new(std::env::temp_dir().join("reckoner-demo"))
        .expect("storage directory");
    let mut history = HistoryStore::load(storage);

    println!("=== Durable Calculation History ===\n");
    println!("Loaded {} persisted calculation(s)", history.len());

    let mut calculator = Calculator::new();

    // Drive the engine the way a UI event loop would: raw keys in,
    // completed records out.
    for key in ["1", "2", "/", "5", "Enter"] {
        if let Some(action) = KeyAction::from_key(key) {
            if let Some(record) = action.apply(&mut calculator) {
                println!("Recorded: {} {}", record.expression, record.result);
                history.append(record).expect("history write");
            }
        }
    }

    println!("\nHistory (newest first):");
    for entry in history.entries() {
        println!("  [{}] {} {}", entry.timestamp.format("%H:%M:%S"), entry.expression, entry.result);
    }

    println!("\nRun this example again to see the log restored from disk.");
}
