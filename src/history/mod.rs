//! Persisted, browsable calculation history.
//!
//! The history store keeps an ordered, newest-first log of completed
//! calculations and mirrors every mutation into durable key-value
//! storage. It has no dependency on the engine beyond the record type;
//! the caller wires the two together.

mod error;
mod storage;
mod store;

pub use error::HistoryError;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
pub use store::{HistoryStore, HISTORY_KEY};
